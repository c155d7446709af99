//! Diagnostic logging for the client.
//!
//! `LOG_LEVEL` takes an `EnvFilter` directive such as `debug` or
//! `warn,code_advisor=debug`; unset or unparsable means `warn`. `LOG_FORMAT=json`
//! switches to one JSON object per event, anything else gives the human format.
//! Everything is written to stderr so stdout only ever holds rendered screens.

use tracing_subscriber::EnvFilter;

#[derive(Debug, PartialEq)]
enum LogFormat {
    Human,
    Json,
}

impl LogFormat {
    fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Human,
        }
    }
}

fn level_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

pub fn init_tracing() {
    let level = std::env::var("LOG_LEVEL").ok();
    let format = std::env::var("LOG_FORMAT").ok();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(level_filter(level.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    match LogFormat::from_env_value(format.as_deref()) {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Human => subscriber.init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_falls_back_to_human() {
        assert_eq!(LogFormat::from_env_value(Some("json")), LogFormat::Json);
        assert_eq!(LogFormat::from_env_value(Some(" JSON ")), LogFormat::Json);
        assert_eq!(LogFormat::from_env_value(Some("pretty")), LogFormat::Human);
        assert_eq!(LogFormat::from_env_value(None), LogFormat::Human);
    }

    #[test]
    fn bad_directive_means_warn() {
        assert_eq!(level_filter(Some("code_advisor=loud")).to_string(), "warn");
        assert_eq!(level_filter(None).to_string(), "warn");
        assert_eq!(level_filter(Some("debug")).to_string(), "debug");
    }
}
