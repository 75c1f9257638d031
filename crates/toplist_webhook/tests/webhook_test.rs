//! Webhook authentication, parsing, and dispatch tests.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use parking_lot::Mutex;
use tower::ServiceExt;

use toplist_core::{BotList, VoteEvent};
use toplist_webhook::{MemoryVoteCache, VoteCache, VoteHandler, VoteWebhook};

/// Handler that records every vote it sees.
#[derive(Default)]
struct RecordingHandler {
    votes: Arc<Mutex<Vec<VoteEvent>>>,
}

impl RecordingHandler {
    fn votes(&self) -> Arc<Mutex<Vec<VoteEvent>>> {
        Arc::clone(&self.votes)
    }
}

#[async_trait]
impl VoteHandler for RecordingHandler {
    async fn on_vote(
        &self,
        vote: &VoteEvent,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.votes.lock().push(vote.clone());
        Ok(())
    }
}

/// Handler that always fails.
struct FailingHandler;

#[async_trait]
impl VoteHandler for FailingHandler {
    async fn on_vote(
        &self,
        _vote: &VoteEvent,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Err("handler exploded".into())
    }
}

fn request(path: &str, auth: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(path)
        .header("Content-Type", "application/json");
    if let Some(auth) = auth {
        builder = builder.header("Authorization", auth);
    }
    builder.body(Body::from(body.to_string())).expect("request")
}

const TOPGG_BODY: &str = r#"{"bot":"42","user":"7","type":"upvote","isWeekend":true}"#;
const DBL_BODY: &str = r#"{"id":"7","username":"voter","avatar":"a1b2","admin":true}"#;

#[tokio::test]
async fn test_topgg_vote_reaches_handler() {
    let handler = RecordingHandler::default();
    let votes = handler.votes();
    let router = VoteWebhook::new("s3cret", "42")
        .on_vote(Arc::new(handler))
        .into_router();

    let response = router
        .oneshot(request("/webhook/topgg", Some("s3cret"), TOPGG_BODY))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let votes = votes.lock();
    assert_eq!(votes.len(), 1);
    assert_eq!(votes[0].site, BotList::TopGg);
    assert_eq!(votes[0].user_id, "7");
    assert_eq!(votes[0].bot_id, "42");
    assert!(votes[0].is_weekend);
}

#[tokio::test]
async fn test_dbl_vote_uses_configured_bot_id() {
    let handler = RecordingHandler::default();
    let votes = handler.votes();
    let router = VoteWebhook::new("s3cret", "42")
        .on_vote(Arc::new(handler))
        .into_router();

    let response = router
        .oneshot(request("/webhook/dbl", Some("s3cret"), DBL_BODY))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let votes = votes.lock();
    assert_eq!(votes.len(), 1);
    assert_eq!(votes[0].site, BotList::Dbl);
    assert_eq!(votes[0].bot_id, "42");
    assert!(!votes[0].is_weekend);
}

#[tokio::test]
async fn test_wrong_secret_is_401_and_never_reaches_handlers() {
    let handler = RecordingHandler::default();
    let votes = handler.votes();
    let router = VoteWebhook::new("s3cret", "42")
        .on_vote(Arc::new(handler))
        .into_router();

    let response = router
        .oneshot(request("/webhook/topgg", Some("wrong"), TOPGG_BODY))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(votes.lock().is_empty());
}

#[tokio::test]
async fn test_missing_secret_is_401() {
    let router = VoteWebhook::new("s3cret", "42").into_router();

    let response = router
        .oneshot(request("/webhook/topgg", None, TOPGG_BODY))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_malformed_body_is_400_and_never_reaches_handlers() {
    let handler = RecordingHandler::default();
    let votes = handler.votes();
    let router = VoteWebhook::new("s3cret", "42")
        .on_vote(Arc::new(handler))
        .into_router();

    let response = router
        .oneshot(request("/webhook/topgg", Some("s3cret"), "not json"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(votes.lock().is_empty());
}

#[tokio::test]
async fn test_failing_handler_does_not_block_later_handlers() {
    let recorder = RecordingHandler::default();
    let votes = recorder.votes();
    let router = VoteWebhook::new("s3cret", "42")
        .on_vote(Arc::new(FailingHandler))
        .on_vote(Arc::new(recorder))
        .into_router();

    let response = router
        .oneshot(request("/webhook/topgg", Some("s3cret"), TOPGG_BODY))
        .await
        .expect("response");

    // Handler failures stay server-side.
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(votes.lock().len(), 1);
}

#[tokio::test]
async fn test_votes_are_cached() {
    let cache = Arc::new(MemoryVoteCache::new());
    let router = VoteWebhook::new("s3cret", "42")
        .with_cache(Arc::clone(&cache) as Arc<dyn VoteCache>)
        .into_router();

    router
        .clone()
        .oneshot(request("/webhook/topgg", Some("s3cret"), TOPGG_BODY))
        .await
        .expect("response");
    router
        .oneshot(request("/webhook/dbl", Some("s3cret"), DBL_BODY))
        .await
        .expect("response");

    let cached = cache.fetchmany().await;
    assert_eq!(cached.len(), 2);
    assert_eq!(cached[0].number, 0);
    assert_eq!(cached[0].vote.site, BotList::TopGg);
    assert_eq!(cached[1].vote.site, BotList::Dbl);
}
