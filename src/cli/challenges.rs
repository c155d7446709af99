use crate::config::ClientConfig;
use crate::learner::LearnerScreen;
use crate::messages::Messages;

use super::learner_catalogue;

pub fn list_challenges(cfg: &ClientConfig) {
    let msgs = Messages::for_locale(cfg.locale);
    let title = msgs.app_title;
    let screen = LearnerScreen::new(learner_catalogue(cfg), msgs);

    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}\n", "=".repeat(60));
    println!("{}", screen.render_challenges());
    println!("\nRun `code-advisor submit --challenge <ID> --file <PATH>` to submit");
}
