//! Legacy screen: a free-text challenge id, a code box and the feedback text.
//!
//! No client-side validation; the service rejects empty fields itself.

use tracing::{error, instrument};

use crate::api::{AdvisorApi, SubmitError};
use crate::feedback_view::LegacyFeedbackView;
use crate::messages::Messages;
use crate::protocol::SubmitCodeRequest;

#[derive(Default)]
pub struct LegacyScreen {
  pub challenge_id: String,
  pub code: String,
  pub feedback: Option<String>,
}

impl LegacyScreen {
  #[instrument(level = "info", skip_all, fields(challenge_id = %self.challenge_id, code_len = self.code.len()))]
  pub async fn submit(&mut self, api: &AdvisorApi) -> Result<(), SubmitError> {
    let req = SubmitCodeRequest { code: self.code.clone(), challenge_id: self.challenge_id.clone() };
    match api.submit_code_legacy(&req).await {
      Ok(text) => {
        self.feedback = Some(text);
        Ok(())
      }
      Err(e) => {
        error!(target: "code_advisor", kind = e.kind(), error = %e, "Legacy submission failed");
        Err(e)
      }
    }
  }

  pub fn render(&self, msgs: &Messages) -> String {
    let mut out = msgs.legacy_title.to_string();
    if let Some(fb) = &self.feedback {
      out.push_str("\n\n");
      out.push_str(&LegacyFeedbackView { feedback: fb }.render(msgs));
    }
    out
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::api::{test_server, Endpoint};
  use axum::http::StatusCode;
  use serde_json::json;

  async fn api_for(status: StatusCode, body: serde_json::Value) -> AdvisorApi {
    let addr = test_server::spawn(status, body).await;
    AdvisorApi::new(Endpoint::Relative { origin: format!("http://{}", addr), path: "/submit-code".into() }, None).unwrap()
  }

  #[tokio::test]
  async fn stores_feedback_text() {
    let api = api_for(StatusCode::OK, json!({"feedback": "Use a loop.", "result": {"stdout": "", "stderr": "", "returncode": 0}})).await;
    let mut s = LegacyScreen { challenge_id: "challenge-1".into(), code: "print(1)".into(), feedback: None };
    s.submit(&api).await.unwrap();
    assert_eq!(s.feedback.as_deref(), Some("Use a loop."));
    assert!(s.render(&Messages::default()).contains("Feedback\n"));
  }

  #[tokio::test]
  async fn empty_fields_are_sent_and_rejected_by_the_service() {
    let api = api_for(StatusCode::OK, json!({"feedback": "unused"})).await;
    let mut s = LegacyScreen { feedback: Some("earlier".into()), ..Default::default() };
    let err = s.submit(&api).await.unwrap_err();
    assert!(matches!(err, SubmitError::Status { status: 400, .. }));
    assert_eq!(s.feedback.as_deref(), Some("earlier"));
  }

  #[test]
  fn render_without_feedback_is_title_only() {
    assert_eq!(LegacyScreen::default().render(&Messages::default()), "Challenge Advisor");
  }
}
