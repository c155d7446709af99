mod admin_cmd;
mod challenges;
mod legacy_cmd;
mod submit;

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::ClientConfig;
use crate::domain::Challenge;
use crate::messages::Locale;
use crate::seeds::learner_challenges;

#[derive(Parser)]
#[command(name = "code-advisor")]
#[command(about = "Submit code to the advisor service and read its feedback", long_about = None)]
pub struct Cli {
    /// Interface language
    #[arg(long, global = true, value_enum)]
    pub locale: Option<Locale>,

    /// Absolute /submit-code URL for the learner client
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the available challenges
    Challenges,
    /// Submit code for a challenge and show the feedback (exit 2 if flagged as cheating)
    Submit {
        #[arg(long)]
        challenge: String,
        /// Read code from this file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Submit through the legacy client (relative endpoint, text feedback only)
    Legacy {
        #[arg(long, default_value = "")]
        challenge_id: String,
        #[arg(long)]
        file: Option<PathBuf>,
        /// Origin the relative endpoint is resolved against
        #[arg(long)]
        origin: Option<String>,
    },
    /// Edit challenges in memory (changes are discarded on exit)
    Admin,
}

pub async fn run(cli: Cli, mut cfg: ClientConfig) {
    if let Some(locale) = cli.locale {
        cfg.locale = locale;
    }
    if let Some(url) = cli.api_url {
        cfg.api.submit_url = url;
    }

    match cli.command {
        Commands::Challenges => challenges::list_challenges(&cfg),
        Commands::Submit { challenge, file } => submit::submit_code(&cfg, &challenge, file.as_deref()).await,
        Commands::Legacy { challenge_id, file, origin } => {
            if let Some(origin) = origin {
                cfg.api.legacy_origin = origin;
            }
            legacy_cmd::submit_legacy(&cfg, challenge_id, file.as_deref()).await
        }
        Commands::Admin => admin_cmd::run_admin(&cfg),
    }
}

/// Built-in learner challenges followed by any from the config file.
fn learner_catalogue(cfg: &ClientConfig) -> Vec<Challenge> {
    let mut all = learner_challenges();
    for c in &cfg.challenges {
        if all.iter().any(|existing| existing.id == c.id) {
            tracing::warn!(target: "code_advisor", id = %c.id, "Skipping config challenge with duplicate id");
            continue;
        }
        all.push(c.clone());
    }
    all
}

fn read_code(file: Option<&Path>) -> String {
    let result = match file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).map(|_| buf)
        }
    };
    result.unwrap_or_else(|e| {
        match file {
            Some(path) => eprintln!("Failed to read code from '{}': {}", path.display(), e),
            None => eprintln!("Failed to read code from stdin: {}", e),
        }
        std::process::exit(1);
    })
}
