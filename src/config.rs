//! Client configuration: endpoint locations, locale, and an optional extra
//! challenge bank, loaded from TOML with environment overrides.
//!
//! Example file (`ADVISOR_CONFIG_PATH`):
//!
//! ```toml
//! locale = "en"
//!
//! [api]
//! submit_url = "http://localhost:3000/submit-code"
//! legacy_origin = "http://localhost:3000"
//! request_timeout_secs = 30
//!
//! [[challenges]]
//! id = "challenge-4"
//! title = "FizzBuzz"
//! description = "Print 1..=100 replacing multiples of 3 and 5."
//! difficulty = "easy"
//! category = "basics"
//! ```

use serde::Deserialize;
use tracing::{error, info, warn};

use crate::domain::Challenge;
use crate::messages::Locale;
use crate::protocol::SUBMIT_CODE_PATH;

pub const DEFAULT_ORIGIN: &str = "http://localhost:3000";

#[derive(Clone, Debug, Deserialize, Default)]
pub struct ClientConfig {
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub api: ApiConfig,
    /// Appended to the built-in learner challenges.
    #[serde(default)]
    pub challenges: Vec<Challenge>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Absolute endpoint used by the learner client.
    pub submit_url: String,
    /// Origin the legacy client's relative path is resolved against.
    pub legacy_origin: String,
    pub legacy_path: String,
    /// Unset means requests wait indefinitely.
    pub request_timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            submit_url: format!("{}{}", DEFAULT_ORIGIN, SUBMIT_CODE_PATH),
            legacy_origin: DEFAULT_ORIGIN.into(),
            legacy_path: SUBMIT_CODE_PATH.into(),
            request_timeout_secs: None,
        }
    }
}

impl ClientConfig {
    /// File (if any) plus process environment overrides.
    pub fn load() -> Self {
        let mut cfg = load_config_from_env().unwrap_or_default();
        cfg.apply_env_overrides(|key| std::env::var(key).ok());
        cfg
    }

    /// `ADVISOR_SUBMIT_URL`, `ADVISOR_LEGACY_ORIGIN` and `ADVISOR_LOCALE` win
    /// over file values.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("ADVISOR_SUBMIT_URL").filter(|s| !s.trim().is_empty()) {
            self.api.submit_url = url;
        }
        if let Some(origin) = lookup("ADVISOR_LEGACY_ORIGIN").filter(|s| !s.trim().is_empty()) {
            self.api.legacy_origin = origin;
        }
        if let Some(raw) = lookup("ADVISOR_LOCALE") {
            match raw.parse::<Locale>() {
                Ok(locale) => self.locale = locale,
                Err(e) => warn!(target: "code_advisor", error = %e, "Ignoring ADVISOR_LOCALE"),
            }
        }
    }
}

pub fn parse_config(s: &str) -> Result<ClientConfig, toml::de::Error> {
    toml::from_str::<ClientConfig>(s)
}

/// Attempt to load `ClientConfig` from ADVISOR_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_config_from_env() -> Option<ClientConfig> {
    let path = std::env::var("ADVISOR_CONFIG_PATH").ok()?;
    match std::fs::read_to_string(&path) {
        Ok(s) => match parse_config(&s) {
            Ok(cfg) => {
                info!(target: "code_advisor", %path, extra_challenges = cfg.challenges.len(), "Loaded client config (TOML)");
                Some(cfg)
            }
            Err(e) => {
                error!(target: "code_advisor", %path, error = %e, "Failed to parse TOML config");
                None
            }
        },
        Err(e) => {
            error!(target: "code_advisor", %path, error = %e, "Failed to read TOML config file");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Difficulty;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg.locale, Locale::Ja);
        assert_eq!(cfg.api.submit_url, "http://localhost:3000/submit-code");
        assert_eq!(cfg.api.legacy_path, "/submit-code");
        assert!(cfg.api.request_timeout_secs.is_none());
        assert!(cfg.challenges.is_empty());
    }

    #[test]
    fn partial_api_table_keeps_other_defaults() {
        let cfg = parse_config(
            r#"
locale = "en"

[api]
request_timeout_secs = 15

[[challenges]]
id = "challenge-4"
title = "FizzBuzz"
description = "Print 1..=100"
difficulty = "hard"
"#,
        )
        .unwrap();
        assert_eq!(cfg.locale, Locale::En);
        assert_eq!(cfg.api.request_timeout_secs, Some(15));
        assert_eq!(cfg.api.legacy_origin, DEFAULT_ORIGIN);
        assert_eq!(cfg.challenges[0].difficulty, Difficulty::Hard);
        assert_eq!(cfg.challenges[0].category, "");
    }

    #[test]
    fn env_overrides_win() {
        let mut cfg = ClientConfig::default();
        cfg.apply_env_overrides(|key| match key {
            "ADVISOR_SUBMIT_URL" => Some("https://advisor.example/submit-code".into()),
            "ADVISOR_LOCALE" => Some("EN".into()),
            _ => None,
        });
        assert_eq!(cfg.api.submit_url, "https://advisor.example/submit-code");
        assert_eq!(cfg.api.legacy_origin, DEFAULT_ORIGIN);
        assert_eq!(cfg.locale, Locale::En);
    }

    #[test]
    fn bad_locale_override_is_ignored() {
        let mut cfg = ClientConfig::default();
        cfg.apply_env_overrides(|key| (key == "ADVISOR_LOCALE").then(|| "fr".to_string()));
        assert_eq!(cfg.locale, Locale::Ja);
    }
}
