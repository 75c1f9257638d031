//! Vote handler trait.

use async_trait::async_trait;
use toplist_core::VoteEvent;

/// A subscriber to authenticated, parsed vote notifications.
///
/// Handlers run in registration order. A handler error is logged and the
/// remaining handlers still run; the HTTP caller always sees 200 once the
/// request authenticated and parsed.
#[async_trait]
pub trait VoteHandler: Send + Sync {
    /// React to one vote.
    async fn on_vote(
        &self,
        vote: &VoteEvent,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
