//! Toplist - Discord bot-list stats autoposting and vote webhooks.
//!
//! Toplist reports a bot's guild count to multiple bot-list services on a
//! fixed interval and receives their vote notifications over a webhook.
//! Failures are isolated per target: one list rejecting a post (or timing
//! out) never affects the others, and nothing short of an explicit stop
//! ends the autopost loop.
//!
//! # Features
//!
//! - **Multi-list dispatch**: one concurrent POST per configured list
//!   (top.gg, discordbotlist.com, discord.bots.gg) with per-target timeouts
//! - **Autopost loop**: a cancellable background task with typed events
//!   per cycle (`CycleSuccess`, `CycleError`, `StatSourceError`)
//! - **Vote webhooks**: an axum router that authenticates, normalizes, and
//!   dispatches vote notifications to registered handlers
//! - **Vote cache**: optional in-memory record of received votes
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use toplist::{
//!     Autoposter, AutopostConfig, BotList, Dispatcher, DispatcherConfig, TargetDescriptor,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let targets = vec![
//!         TargetDescriptor::builder()
//!             .list(BotList::TopGg)
//!             .token(std::env::var("TOPGG_TOKEN")?)
//!             .bot_id("80351110224678912")
//!             .build(),
//!         TargetDescriptor::builder()
//!             .list(BotList::Dbgg)
//!             .token(std::env::var("DBGG_TOKEN")?)
//!             .bot_id("80351110224678912")
//!             .build(),
//!     ];
//!
//!     let dispatcher = Dispatcher::over_http(targets, DispatcherConfig::default())?;
//!     let autoposter = Autoposter::new(dispatcher, AutopostConfig::default());
//!     let mut events = autoposter.start(Arc::new(MyStatSource)).await?;
//!
//!     while let Some(event) = events.recv().await {
//!         println!("cycle: {event:?}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Toplist is organized as a workspace with focused crates:
//!
//! - `toplist_error` - Error types
//! - `toplist_core` - Core data types (targets, payloads, cycle results, votes)
//! - `toplist_client` - Multi-target dispatcher
//! - `toplist_autopost` - Interval autopost scheduler
//! - `toplist_webhook` - Vote webhook receiver
//!
//! This crate (`toplist`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use toplist_autopost::{AutopostConfig, AutopostEvent, AutopostState, Autoposter, StatSource};
pub use toplist_client::{BotListApi, Dispatcher, DispatcherConfig, HttpPoster};
pub use toplist_core::{
    BotList, CycleResult, Outcome, PostPayload, Secret, TargetDescriptor, VoteEvent,
};
pub use toplist_error::{
    AutopostError, AutopostErrorKind, ClientError, ClientErrorKind, StatSourceError, ToplistError,
    ToplistErrorKind, ToplistResult, WebhookError, WebhookErrorKind,
};
pub use toplist_webhook::{
    CachedVote, DblVotePayload, MemoryVoteCache, TopGgVotePayload, VoteCache, VoteHandler,
    VoteWebhook,
};
