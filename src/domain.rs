//! Domain models shared by the screens: challenges, difficulty, and the feedback
//! returned by the advisor service.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::messages::Locale;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
  #[default]
  Easy,
  Medium,
  Hard,
}

impl Difficulty {
  pub fn as_str(&self) -> &'static str {
    match self {
      Difficulty::Easy => "easy",
      Difficulty::Medium => "medium",
      Difficulty::Hard => "hard",
    }
  }

  /// Label shown in the admin form's difficulty picker.
  pub fn label(&self, locale: Locale) -> &'static str {
    match (locale, self) {
      (Locale::Ja, Difficulty::Easy) => "初級",
      (Locale::Ja, Difficulty::Medium) => "中級",
      (Locale::Ja, Difficulty::Hard) => "上級",
      (Locale::En, Difficulty::Easy) => "Easy",
      (Locale::En, Difficulty::Medium) => "Medium",
      (Locale::En, Difficulty::Hard) => "Hard",
    }
  }
}

impl std::str::FromStr for Difficulty {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "easy" => Ok(Difficulty::Easy),
      "medium" => Ok(Difficulty::Medium),
      "hard" => Ok(Difficulty::Hard),
      other => Err(format!("unknown difficulty '{}' (expected easy, medium or hard)", other)),
    }
  }
}

/// A coding exercise definition. `test_cases` and `common_mistakes` are only
/// authored through the admin editor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
  pub id: String,
  pub title: String,
  pub description: String,
  #[serde(default)]
  pub difficulty: Difficulty,
  #[serde(default)]
  pub category: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub test_cases: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub common_mistakes: Option<String>,
}

/// Raw execution result of the submitted program, as reported by the service.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
  #[serde(default)]
  pub stdout: String,
  #[serde(default)]
  pub stderr: String,
  pub returncode: i64,
}

impl ExecutionResult {
  pub fn passed(&self) -> bool {
    self.returncode == 0
  }
}

/// The service's evaluation of one submission. Built entirely server-side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
  pub feedback: String,
  pub result: ExecutionResult,
  #[serde(default)]
  pub cost: Option<f64>,
  #[serde(default)]
  pub cheat_detected: Option<bool>,
}

impl Feedback {
  pub fn is_cheat_detected(&self) -> bool {
    self.cheat_detected.unwrap_or(false)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn feedback_without_optional_fields() {
    let fb: Feedback = serde_json::from_str(
      r#"{"feedback":"hi","result":{"stdout":"","stderr":"Execution timed out","returncode":-1}}"#,
    )
    .unwrap();
    assert_eq!(fb.cost, None);
    assert!(!fb.is_cheat_detected());
    assert!(!fb.result.passed());
  }

  #[test]
  fn difficulty_parses_case_insensitively() {
    assert_eq!("Medium".parse::<Difficulty>(), Ok(Difficulty::Medium));
    assert!("extreme".parse::<Difficulty>().is_err());
    assert_eq!(Difficulty::Hard.label(Locale::Ja), "上級");
  }

  #[test]
  fn challenge_omits_absent_admin_fields() {
    let c = Challenge {
      id: "challenge-9".into(),
      title: "t".into(),
      description: "d".into(),
      difficulty: Difficulty::Hard,
      category: String::new(),
      test_cases: None,
      common_mistakes: None,
    };
    let json = serde_json::to_string(&c).unwrap();
    assert!(json.contains(r#""difficulty":"hard""#));
    assert!(!json.contains("test_cases"));
  }
}
