//! Webhook router construction and request handling.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
    routing::post,
    Router,
};
use serde_json::json;
use tracing::{debug, error, info};

use crate::payload::{parse, DblVotePayload, TopGgVotePayload};
use crate::{VoteCache, VoteHandler};
use toplist_core::{Secret, VoteEvent};
use toplist_error::{WebhookError, WebhookErrorKind};

/// Builder for the vote webhook router.
///
/// Collects the shared secret, the bot ID (for payloads that omit it), the
/// registered handlers, and an optional vote cache, then produces an axum
/// [`Router`] with one route per supported list.
pub struct VoteWebhook {
    secret: Secret,
    bot_id: String,
    handlers: Vec<Arc<dyn VoteHandler>>,
    cache: Option<Arc<dyn VoteCache>>,
}

impl VoteWebhook {
    /// Create a webhook for the given shared secret and bot ID.
    pub fn new(secret: impl Into<Secret>, bot_id: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            bot_id: bot_id.into(),
            handlers: Vec::new(),
            cache: None,
        }
    }

    /// Register a vote handler. Handlers run in registration order.
    pub fn on_vote(mut self, handler: Arc<dyn VoteHandler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Cache every authenticated vote before handlers run.
    pub fn with_cache(mut self, cache: Arc<dyn VoteCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Build the router.
    pub fn into_router(self) -> Router {
        info!(handlers = self.handlers.len(), "Building vote webhook router");
        let state = WebhookState {
            secret: self.secret,
            bot_id: self.bot_id,
            handlers: Arc::new(self.handlers),
            cache: self.cache,
        };
        Router::new()
            .route("/webhook/topgg", post(receive_topgg))
            .route("/webhook/dbl", post(receive_dbl))
            .with_state(state)
    }
}

#[derive(Clone)]
struct WebhookState {
    secret: Secret,
    bot_id: String,
    handlers: Arc<Vec<Arc<dyn VoteHandler>>>,
    cache: Option<Arc<dyn VoteCache>>,
}

fn authenticate(headers: &HeaderMap, secret: &Secret) -> Result<(), WebhookError> {
    let presented = headers
        .get("Authorization")
        .ok_or_else(|| WebhookError::new(WebhookErrorKind::MissingSecret))?;
    if presented.as_bytes() != secret.expose().as_bytes() {
        return Err(WebhookError::new(WebhookErrorKind::Unauthorized));
    }
    Ok(())
}

fn reject(err: WebhookError) -> (StatusCode, Json<serde_json::Value>) {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    debug!(%err, "Rejecting webhook request");
    (status, Json(json!({ "error": err.kind.to_string() })))
}

async fn deliver(state: &WebhookState, vote: VoteEvent) {
    debug!(site = %vote.site, user_id = %vote.user_id, "Vote received");
    if let Some(cache) = &state.cache {
        cache.insert(vote.clone()).await;
    }
    for handler in state.handlers.iter() {
        if let Err(e) = handler.on_vote(&vote).await {
            error!(error = %e, "Vote handler failed");
        }
    }
}

async fn receive_topgg(
    State(state): State<WebhookState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    if let Err(e) = authenticate(&headers, &state.secret) {
        return reject(e);
    }
    let payload: TopGgVotePayload = match parse(&body) {
        Ok(payload) => payload,
        Err(e) => return reject(e),
    };
    deliver(&state, payload.into_event()).await;
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

async fn receive_dbl(
    State(state): State<WebhookState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    if let Err(e) = authenticate(&headers, &state.secret) {
        return reject(e);
    }
    let payload: DblVotePayload = match parse(&body) {
        Ok(payload) => payload,
        Err(e) => return reject(e),
    };
    deliver(&state, payload.into_event(&state.bot_id)).await;
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}
