//! Learner screen: challenge selector and code submission form.
//!
//! `LearnerScreen` owns all screen state. A submission is split into
//! `begin_submission` (validation, loading flag) and `finish_submission`
//! (apply the result) so an event loop can drive it; `submit` runs both around
//! a single call to the advisor.

use tracing::{error, info, instrument, warn};

use crate::api::{SubmitCode, SubmitError};
use crate::domain::{Challenge, Feedback};
use crate::feedback_view::FeedbackPanel;
use crate::messages::Messages;
use crate::protocol::SubmitCodeRequest;
use crate::toast::Toast;

/// What happened to one press of the submit control.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Blocked before any request was sent.
    Rejected,
    Delivered { cheat_detected: bool },
    Failed(SubmitError),
}

pub struct LearnerScreen {
    pub challenges: Vec<Challenge>,
    pub selected: Option<String>,
    pub code: String,
    pub feedback: Option<Feedback>,
    pub is_loading: bool,
    pub toasts: Vec<Toast>,
    pub msgs: Messages,
}

impl LearnerScreen {
    pub fn new(challenges: Vec<Challenge>, msgs: Messages) -> Self {
        Self {
            challenges,
            selected: None,
            code: String::new(),
            feedback: None,
            is_loading: false,
            toasts: Vec::new(),
            msgs,
        }
    }

    /// Make `id` the submission target. Unknown ids leave the selection as is.
    pub fn select(&mut self, id: &str) -> bool {
        if self.challenges.iter().any(|c| c.id == id) {
            self.selected = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn selected_challenge(&self) -> Option<&Challenge> {
        let id = self.selected.as_deref()?;
        self.challenges.iter().find(|c| c.id == id)
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    pub fn code_input_enabled(&self) -> bool {
        self.selected.is_some()
    }

    /// Enabled state of the submit control.
    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && !self.code.trim().is_empty() && !self.is_loading
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading { self.msgs.submit_loading } else { self.msgs.submit_idle }
    }

    /// Caption above the code box: the selected title, or a prompt to choose one.
    pub fn code_caption(&self) -> &str {
        self.selected_challenge()
            .map(|c| c.title.as_str())
            .unwrap_or(self.msgs.select_prompt)
    }

    /// Validate and mark the screen busy. `None` means nothing must be sent.
    pub fn begin_submission(&mut self) -> Option<SubmitCodeRequest> {
        if self.is_loading {
            self.toasts.push(Toast::warning(self.msgs.submit_busy));
            return None;
        }
        let selected = self.selected_challenge().map(|c| c.id.clone());
        let challenge_id = match selected {
            Some(id) if !self.code.trim().is_empty() => id,
            _ => {
                self.toasts.push(Toast::error(self.msgs.submit_validation));
                return None;
            }
        };
        self.is_loading = true;
        Some(SubmitCodeRequest { code: self.code.clone(), challenge_id })
    }

    /// Apply the advisor's answer. Errors keep whatever feedback was shown before.
    pub fn finish_submission(&mut self, result: Result<Feedback, SubmitError>) -> SubmitOutcome {
        self.is_loading = false;
        match result {
            Ok(fb) => {
                let cheat_detected = fb.is_cheat_detected();
                if cheat_detected {
                    warn!(target: "code_advisor", "Advisor flagged the submission as cheating");
                    self.toasts.push(Toast::warning(self.msgs.submit_cheat_warning));
                } else {
                    self.toasts.push(Toast::success(self.msgs.submit_success));
                }
                self.feedback = Some(fb);
                SubmitOutcome::Delivered { cheat_detected }
            }
            Err(e) => {
                error!(target: "code_advisor", kind = e.kind(), error = %e, "Submission failed");
                self.toasts.push(Toast::error(self.msgs.submit_failed));
                SubmitOutcome::Failed(e)
            }
        }
    }

    #[instrument(level = "info", skip_all, fields(selected = ?self.selected, code_len = self.code.len()))]
    pub async fn submit<S: SubmitCode>(&mut self, api: &S) -> SubmitOutcome {
        let Some(req) = self.begin_submission() else {
            info!(target: "code_advisor", "Submission rejected before sending");
            return SubmitOutcome::Rejected;
        };
        info!(target: "code_advisor", status = self.submit_label(), challenge_id = %req.challenge_id, "Sending submission");
        let result = api.submit(&req).await;
        self.finish_submission(result)
    }

    pub fn feedback_panel(&self) -> Option<FeedbackPanel> {
        self.feedback.as_ref().map(|fb| FeedbackPanel::from_feedback(fb, &self.msgs))
    }

    /// Selector list: selected entry marked, difficulty and category badges.
    pub fn render_challenges(&self) -> String {
        let mut out = vec![self.msgs.select_heading.to_string(), "-".repeat(60)];
        for c in &self.challenges {
            let marker = if self.selected.as_deref() == Some(c.id.as_str()) { ">" } else { " " };
            out.push(format!("{} {}  {}  [{}]", marker, c.id, c.title, c.difficulty.as_str()));
            out.push(format!("    {}", c.description));
            if !c.category.is_empty() {
                out.push(format!("    ({})", c.category));
            }
        }
        out.join("\n")
    }
}
