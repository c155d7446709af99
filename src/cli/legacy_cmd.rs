use std::path::Path;

use crate::api::AdvisorApi;
use crate::config::ClientConfig;
use crate::legacy::LegacyScreen;
use crate::messages::Messages;

use super::read_code;

pub async fn submit_legacy(cfg: &ClientConfig, challenge_id: String, file: Option<&Path>) {
    let msgs = Messages::for_locale(cfg.locale);
    let mut screen = LegacyScreen { challenge_id, code: read_code(file), feedback: None };

    let api = match AdvisorApi::legacy(&cfg.api) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("Failed to set up HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = screen.submit(&api).await {
        eprintln!("Submission failed: {}", e);
        std::process::exit(1);
    }
    println!("{}", screen.render(&msgs));
}
