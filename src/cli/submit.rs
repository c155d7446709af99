use std::path::Path;

use crate::api::AdvisorApi;
use crate::config::ClientConfig;
use crate::learner::{LearnerScreen, SubmitOutcome};
use crate::messages::Messages;
use crate::toast;

use super::{learner_catalogue, read_code};

/// Exits 1 when nothing was delivered and 2 when the advisor flagged cheating.
pub async fn submit_code(cfg: &ClientConfig, challenge: &str, file: Option<&Path>) {
    let mut screen = LearnerScreen::new(learner_catalogue(cfg), Messages::for_locale(cfg.locale));

    screen.select(challenge);
    if !screen.code_input_enabled() {
        eprintln!(
            "Unknown challenge '{}'. Run `code-advisor challenges` to see the list.",
            challenge
        );
        std::process::exit(1);
    }
    screen.set_code(read_code(file));

    let api = match AdvisorApi::learner(&cfg.api) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("Failed to set up HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    if screen.can_submit() {
        eprintln!("[{}] {}", screen.submit_label(), screen.code_caption());
    }
    let outcome = screen.submit(&api).await;
    toast::flush(&mut screen.toasts);

    if let Some(panel) = screen.feedback_panel() {
        println!("{}", panel.render(&screen.msgs));
    }

    match outcome {
        SubmitOutcome::Delivered { cheat_detected: false } => {}
        SubmitOutcome::Delivered { cheat_detected: true } => std::process::exit(2),
        SubmitOutcome::Failed(e) => {
            eprintln!("Submission failed: {}", e);
            std::process::exit(1);
        }
        SubmitOutcome::Rejected => std::process::exit(1),
    }
}
