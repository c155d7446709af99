//! Wire structs for the advisor service's `/submit-code` endpoint (serde ready).
//! The learner response is `domain::Feedback`; the legacy client only reads the
//! feedback text out of the same body.

use serde::{Deserialize, Serialize};

pub const SUBMIT_CODE_PATH: &str = "/submit-code";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmitCodeRequest {
    pub code: String,
    pub challenge_id: String,
}

/// The subset of the response the legacy client cares about.
#[derive(Debug, Deserialize)]
pub struct LegacyFeedback {
    #[serde(default)]
    pub feedback: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_snake_case_keys() {
        let req = SubmitCodeRequest { code: "print(1)".into(), challenge_id: "challenge-2".into() };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["code"], "print(1)");
        assert_eq!(v["challenge_id"], "challenge-2");
    }

    #[test]
    fn legacy_body_ignores_extra_fields() {
        let body = r#"{"feedback":"nice","result":{"stdout":"","stderr":"","returncode":0}}"#;
        let fb: LegacyFeedback = serde_json::from_str(body).unwrap();
        assert_eq!(fb.feedback, "nice");
    }
}
