//! Minimal HTTP client for the advisor service.
//!
//! There is exactly one call: `POST /submit-code`. The learner client targets an
//! absolute URL, the legacy client a relative path resolved against an origin.
//! Calls are instrumented and log status, latency and body size (never the code).

use std::time::{Duration, Instant};

use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::Url;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{error, info, instrument};

use crate::config::ApiConfig;
use crate::domain::Feedback;
use crate::protocol::{LegacyFeedback, SubmitCodeRequest};
use crate::util::trunc_for_log;

const CLIENT_UA: &str = concat!("code-advisor/", env!("CARGO_PKG_VERSION"));

/// Why a submission produced no feedback. The screens show one generic message
/// for all of these; the distinction only reaches the logs.
#[derive(Debug, Error)]
pub enum SubmitError {
  #[error("invalid endpoint: {0}")]
  InvalidEndpoint(String),
  #[error("request failed: {0}")]
  Transport(String),
  #[error("advisor returned HTTP {status}")]
  Status { status: u16, body: String },
  #[error("malformed response: {0}")]
  Decode(String),
}

impl SubmitError {
  pub fn kind(&self) -> &'static str {
    match self {
      SubmitError::InvalidEndpoint(_) => "invalid_endpoint",
      SubmitError::Transport(_) => "transport",
      SubmitError::Status { .. } => "status",
      SubmitError::Decode(_) => "decode",
    }
  }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Endpoint {
  Absolute(String),
  Relative { origin: String, path: String },
}

impl Endpoint {
  /// Resolve to a full URL. Relative paths follow browser semantics: a leading
  /// `/` replaces whatever path the origin carries.
  pub fn url(&self) -> Result<Url, SubmitError> {
    match self {
      Endpoint::Absolute(raw) => {
        let url = Url::parse(raw).map_err(|e| SubmitError::InvalidEndpoint(format!("{}: {}", raw, e)))?;
        ensure_http(url)
      }
      Endpoint::Relative { origin, path } => {
        let base = Url::parse(origin).map_err(|e| SubmitError::InvalidEndpoint(format!("{}: {}", origin, e)))?;
        let url = base
          .join(path)
          .map_err(|e| SubmitError::InvalidEndpoint(format!("{} + {}: {}", origin, path, e)))?;
        ensure_http(url)
      }
    }
  }
}

fn ensure_http(url: Url) -> Result<Url, SubmitError> {
  match url.scheme() {
    "http" | "https" => Ok(url),
    other => Err(SubmitError::InvalidEndpoint(format!("unsupported scheme '{}'", other))),
  }
}

/// Seam between the learner screen and the network.
pub trait SubmitCode {
  async fn submit(&self, req: &SubmitCodeRequest) -> Result<Feedback, SubmitError>;
}

#[derive(Clone)]
pub struct AdvisorApi {
  pub client: reqwest::Client,
  pub endpoint: Endpoint,
}

impl AdvisorApi {
  pub fn new(endpoint: Endpoint, timeout: Option<Duration>) -> Result<Self, SubmitError> {
    let mut builder = reqwest::Client::builder();
    if let Some(t) = timeout {
      builder = builder.timeout(t);
    }
    let client = builder.build().map_err(|e| SubmitError::Transport(e.to_string()))?;
    Ok(Self { client, endpoint })
  }

  /// Client for the learner screen (absolute URL).
  pub fn learner(cfg: &ApiConfig) -> Result<Self, SubmitError> {
    Self::new(
      Endpoint::Absolute(cfg.submit_url.clone()),
      cfg.request_timeout_secs.map(Duration::from_secs),
    )
  }

  /// Client for the legacy screen (relative path against an origin).
  pub fn legacy(cfg: &ApiConfig) -> Result<Self, SubmitError> {
    Self::new(
      Endpoint::Relative { origin: cfg.legacy_origin.clone(), path: cfg.legacy_path.clone() },
      cfg.request_timeout_secs.map(Duration::from_secs),
    )
  }

  /// Full feedback for the learner screen.
  #[instrument(level = "info", skip(self, req), fields(challenge_id = %req.challenge_id, code_len = req.code.len()))]
  pub async fn submit_code(&self, req: &SubmitCodeRequest) -> Result<Feedback, SubmitError> {
    self.post_json::<Feedback>(req).await
  }

  /// Feedback text only, as the legacy screen displays it.
  #[instrument(level = "info", skip(self, req), fields(challenge_id = %req.challenge_id, code_len = req.code.len()))]
  pub async fn submit_code_legacy(&self, req: &SubmitCodeRequest) -> Result<String, SubmitError> {
    self.post_json::<LegacyFeedback>(req).await.map(|b| b.feedback)
  }

  async fn post_json<T: DeserializeOwned>(&self, req: &SubmitCodeRequest) -> Result<T, SubmitError> {
    let url = self.endpoint.url()?;
    let started = Instant::now();

    let res = self.client.post(url.clone())
      .header(USER_AGENT, CLIENT_UA)
      .header(CONTENT_TYPE, "application/json")
      .header(ACCEPT, "application/json")
      .json(req).send().await
      .map_err(|e| SubmitError::Transport(e.to_string()))?;

    let status = res.status();
    let body = res.text().await.map_err(|e| SubmitError::Transport(e.to_string()))?;
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if !status.is_success() {
      error!(target: "code_advisor", %url, status = status.as_u16(), elapsed_ms, body = %trunc_for_log(&body, 200), "Advisor returned non-success status");
      return Err(SubmitError::Status { status: status.as_u16(), body });
    }

    info!(target: "code_advisor", %url, status = status.as_u16(), elapsed_ms, body_len = body.len(), "Advisor responded");
    serde_json::from_str::<T>(&body).map_err(|e| SubmitError::Decode(e.to_string()))
  }
}

impl SubmitCode for AdvisorApi {
  async fn submit(&self, req: &SubmitCodeRequest) -> Result<Feedback, SubmitError> {
    self.submit_code(req).await
  }
}

#[cfg(test)]
pub(crate) mod test_server {
  //! In-process stand-in for the advisor service.

  use std::net::SocketAddr;

  use axum::{http::StatusCode, routing::post, Json, Router};
  use serde_json::{json, Value};
  use tokio::net::TcpListener;

  /// Serve `POST /submit-code` answering with `status` and `body`. Like the real
  /// service, requests with an empty `code` or `challenge_id` get a 400.
  /// Returns the bound address.
  pub async fn spawn(status: StatusCode, body: Value) -> SocketAddr {
    let app = Router::new().route(
      "/submit-code",
      post(move |Json(req): Json<Value>| {
        let body = body.clone();
        async move {
          let missing = |key: &str| req[key].as_str().map_or(true, str::is_empty);
          if missing("code") || missing("challenge_id") {
            return (StatusCode::BAD_REQUEST, Json(json!({"detail": "code and challenge_id required"})));
          }
          (status, Json(body))
        }
      }),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
      axum::serve(listener, app).await.unwrap();
    });
    addr
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use axum::http::StatusCode;
  use serde_json::json;

  fn request() -> SubmitCodeRequest {
    SubmitCodeRequest { code: "print(1)".into(), challenge_id: "challenge-1".into() }
  }

  #[test]
  fn relative_path_replaces_origin_path() {
    let ep = Endpoint::Relative { origin: "http://localhost:3000/app/".into(), path: "/submit-code".into() };
    assert_eq!(ep.url().unwrap().as_str(), "http://localhost:3000/submit-code");
  }

  #[test]
  fn non_http_endpoints_are_rejected() {
    let err = Endpoint::Absolute("ftp://example.com/submit-code".into()).url().unwrap_err();
    assert_eq!(err.kind(), "invalid_endpoint");
    assert!(Endpoint::Absolute("not a url".into()).url().is_err());
  }

  #[tokio::test]
  async fn submit_code_parses_feedback() {
    let addr = test_server::spawn(
      StatusCode::OK,
      json!({"feedback": "ok", "result": {"stdout": "1", "stderr": "", "returncode": 0}, "cost": 0.001}),
    )
    .await;
    let api = AdvisorApi::new(Endpoint::Absolute(format!("http://{}/submit-code", addr)), None).unwrap();
    let fb = api.submit_code(&request()).await.unwrap();
    assert_eq!(fb.feedback, "ok");
    assert_eq!(fb.result.stdout, "1");
    assert_eq!(fb.cost, Some(0.001));
    assert!(!fb.is_cheat_detected());
  }

  #[tokio::test]
  async fn non_success_status_is_an_error() {
    let addr = test_server::spawn(StatusCode::BAD_REQUEST, json!({"detail": "code and challenge_id required"})).await;
    let api = AdvisorApi::new(Endpoint::Absolute(format!("http://{}/submit-code", addr)), None).unwrap();
    match api.submit_code(&request()).await {
      Err(SubmitError::Status { status, body }) => {
        assert_eq!(status, 400);
        assert!(body.contains("required"));
      }
      other => panic!("expected status error, got {:?}", other),
    }
  }

  #[tokio::test]
  async fn unexpected_body_is_a_decode_error() {
    let addr = test_server::spawn(StatusCode::OK, json!({"message": "hello"})).await;
    let api = AdvisorApi::new(Endpoint::Absolute(format!("http://{}/submit-code", addr)), None).unwrap();
    let err = api.submit_code(&request()).await.unwrap_err();
    assert_eq!(err.kind(), "decode");
  }

  #[tokio::test]
  async fn legacy_client_posts_to_relative_path() {
    let addr = test_server::spawn(StatusCode::OK, json!({"feedback": "looks fine"})).await;
    let api = AdvisorApi::new(
      Endpoint::Relative { origin: format!("http://{}", addr), path: "/submit-code".into() },
      None,
    )
    .unwrap();
    assert_eq!(api.submit_code_legacy(&request()).await.unwrap(), "looks fine");
  }

  #[tokio::test]
  async fn unreachable_backend_is_a_transport_error() {
    // Bind then drop to get a port nobody listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let api = AdvisorApi::new(
      Endpoint::Absolute(format!("http://{}/submit-code", addr)),
      Some(Duration::from_secs(5)),
    )
    .unwrap();
    assert_eq!(api.submit_code(&request()).await.unwrap_err().kind(), "transport");
  }
}
