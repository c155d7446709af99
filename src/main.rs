//! Code Advisor · terminal client
//!
//! - Learner flow: pick a challenge, submit code, read the AI feedback
//! - Legacy flow: same endpoint through a relative path, feedback text only
//! - Admin flow: in-memory challenge editor (nothing is persisted)
//!
//! Important env variables:
//!   ADVISOR_CONFIG_PATH   : path to TOML config (endpoints, locale, extra challenges)
//!   ADVISOR_SUBMIT_URL    : absolute /submit-code URL (default "http://localhost:3000/submit-code")
//!   ADVISOR_LEGACY_ORIGIN : origin for the legacy relative path (default "http://localhost:3000")
//!   ADVISOR_LOCALE        : "ja" (default) or "en"
//!   LOG_LEVEL             : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT            : "pretty" (default) or "json"

mod admin;
mod api;
mod cli;
mod config;
mod domain;
mod feedback_view;
mod learner;
mod legacy;
mod messages;
mod protocol;
mod seeds;
mod telemetry;
mod toast;
mod util;

use clap::Parser;

use crate::cli::Cli;
use crate::config::ClientConfig;

#[tokio::main]
async fn main() {
    telemetry::init_tracing();
    let cli = Cli::parse();
    let cfg = ClientConfig::load();
    cli::run(cli, cfg).await;
}
