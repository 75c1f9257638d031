//! Vote webhook receiver.
//!
//! Bot lists notify a bot of votes by POSTing to an endpoint the bot
//! operator registers with them. This crate builds that endpoint as an axum
//! router: requests are authenticated against a shared secret, site
//! payloads are normalized into [`VoteEvent`]s, and registered handlers are
//! invoked in order. Unauthenticated or malformed requests are rejected
//! with 401/400 and never reach a handler.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use toplist_core::VoteEvent;
//! use toplist_webhook::{VoteHandler, VoteWebhook};
//!
//! struct ThankVoter;
//!
//! #[async_trait]
//! impl VoteHandler for ThankVoter {
//!     async fn on_vote(&self, vote: &VoteEvent) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!         println!("thanks for voting, {}!", vote.user_id);
//!         Ok(())
//!     }
//! }
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let router = VoteWebhook::new("webhook-secret", "80351110224678912")
//!     .on_vote(Arc::new(ThankVoter))
//!     .into_router();
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, router).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cache;
mod handler;
mod payload;
mod router;

pub use cache::{CachedVote, MemoryVoteCache, VoteCache};
pub use handler::VoteHandler;
pub use payload::{DblVotePayload, TopGgVotePayload};
pub use router::VoteWebhook;
