//! Backend-as-a-service client
//!
//! Talks to a Supabase-compatible project: the GoTrue auth API under
//! `/auth/v1` and the PostgREST data API under `/rest/v1`. Every request
//! carries the project's anon key in the `apikey` header; the `Authorization`
//! header carries the signed-in user's access token when there is one, so the
//! backend's row-level security applies to that user.

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::config::BackendConfig;

pub mod auth;
pub mod reviews;
pub mod types;

pub use types::{NewReviewRow, ReviewRow, Session, SignUpOutcome, User, UserMetadata};

/// Errors returned by the backend
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Backend request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse backend response: {0}")]
    Decode(String),
}

impl BackendError {
    /// HTTP status reported by the backend, if it answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            BackendError::Api { status, .. } => Some(*status),
            BackendError::Request(e) => e.status().map(|s| s.as_u16()),
            BackendError::Decode(_) => None,
        }
    }

    /// True when the backend rejected the caller's credentials.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

/// Shared backend client. Cloning is cheap.
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    config: Arc<BackendConfig>,
}

impl BackendClient {
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        debug!(url = %config.url, table = %config.reviews_table, "Backend client initialized");

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    pub fn reviews_table(&self) -> &str {
        &self.config.reviews_table
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1{}", self.config.url.trim_end_matches('/'), path)
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.config.url.trim_end_matches('/'), table)
    }

    fn request(&self, method: Method, url: &str, access_token: Option<&str>) -> RequestBuilder {
        let bearer = access_token.unwrap_or(&self.config.anon_key);
        self.client
            .request(method, url)
            .header("apikey", &self.config.anon_key)
            .bearer_auth(bearer)
    }
}

/// Returns the response when successful, otherwise the backend's error message.
async fn check_status(response: Response) -> Result<Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("Backend request failed")
            .to_string()
    });

    debug!(status = status.as_u16(), %message, "Backend returned an error");

    Err(BackendError::Api {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
    let bytes = check_status(response).await?.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| BackendError::Decode(e.to_string()))
}

/// Pulls a human-readable message out of a GoTrue or PostgREST error body.
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["error_description", "msg", "message", "error"]
        .iter()
        .filter_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_gotrue() {
        let body = r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#;
        assert_eq!(error_message(body).as_deref(), Some("Invalid login credentials"));

        let body = r#"{"code":422,"msg":"User already registered"}"#;
        assert_eq!(error_message(body).as_deref(), Some("User already registered"));
    }

    #[test]
    fn test_error_message_postgrest() {
        let body = r#"{"code":"42501","details":null,"hint":null,"message":"new row violates row-level security policy"}"#;
        assert_eq!(
            error_message(body).as_deref(),
            Some("new row violates row-level security policy")
        );
    }

    #[test]
    fn test_error_message_unparseable() {
        assert_eq!(error_message("<html>502</html>"), None);
        assert_eq!(error_message(r#"{"message":"  "}"#), None);
    }

    #[test]
    fn test_auth_failure_detection() {
        let err = BackendError::Api {
            status: 401,
            message: "invalid JWT".to_string(),
        };
        assert!(err.is_auth_failure());
        assert_eq!(err.to_string(), "invalid JWT");

        let err = BackendError::Api {
            status: 400,
            message: "bad".to_string(),
        };
        assert!(!err.is_auth_failure());
        assert!(!BackendError::Decode("eof".into()).is_auth_failure());
    }
}
