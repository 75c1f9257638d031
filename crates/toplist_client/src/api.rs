//! Bot-list API trait and reqwest-backed implementation.

use async_trait::async_trait;
use tracing::{debug, warn};

use toplist_core::{Outcome, PostPayload, TargetDescriptor};
use toplist_error::{ClientError, ClientErrorKind};

/// One stats post to one bot list.
///
/// Implementations never return errors; every failure mode becomes an
/// [`Outcome::Failure`] so the dispatcher can report all targets uniformly.
/// Timeouts are enforced by the dispatcher, not the implementation.
#[async_trait]
pub trait BotListApi: Send + Sync {
    /// Post the payload to the target's stats endpoint.
    async fn post_stats(&self, target: &TargetDescriptor, payload: &PostPayload) -> Outcome;
}

/// Posts stats over HTTP with reqwest.
#[derive(Debug, Clone)]
pub struct HttpPoster {
    client: reqwest::Client,
}

impl HttpPoster {
    /// Create a poster with a fresh HTTP client.
    pub fn new() -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("toplist/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::new(ClientErrorKind::ClientBuild(e.to_string())))?;
        Ok(Self { client })
    }

    /// Derive a failure message from an error response.
    ///
    /// Bot lists return `{"error": "..."}` or `{"message": "..."}` bodies;
    /// fall back to the canonical status text when neither parses.
    fn failure_message(status: reqwest::StatusCode, body: &str) -> String {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
            for key in ["error", "message"] {
                if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                    return text.to_string();
                }
            }
        }
        status
            .canonical_reason()
            .unwrap_or("unknown status")
            .to_string()
    }
}

#[async_trait]
impl BotListApi for HttpPoster {
    async fn post_stats(&self, target: &TargetDescriptor, payload: &PostPayload) -> Outcome {
        let url = target.stats_url();
        let body = payload.to_body(*target.list());

        debug!(list = %target.list(), %url, "Posting stats");

        let response = self
            .client
            .post(&url)
            .header(target.list().auth_header(), target.token().expose())
            .json(&body)
            .send()
            .await;

        match response {
            Ok(response) if response.status().is_success() => {
                debug!(list = %target.list(), status = %response.status(), "Stats accepted");
                Outcome::Success
            }
            Ok(response) => {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                let message = Self::failure_message(status, &body);
                warn!(list = %target.list(), status = %status, %message, "Stats rejected");
                Outcome::Failure {
                    status: Some(status.as_u16()),
                    message,
                }
            }
            Err(e) => {
                warn!(list = %target.list(), error = %e, "Stats post failed");
                Outcome::Failure {
                    status: None,
                    message: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_prefers_error_field() {
        let message =
            HttpPoster::failure_message(reqwest::StatusCode::UNAUTHORIZED, r#"{"error":"bad token"}"#);
        assert_eq!(message, "bad token");
    }

    #[test]
    fn test_failure_message_falls_back_to_status_text() {
        let message = HttpPoster::failure_message(reqwest::StatusCode::BAD_GATEWAY, "<html>");
        assert_eq!(message, "Bad Gateway");
    }
}
