//! Interval autopost scheduler.
//!
//! The [`Autoposter`] runs a single background loop that, on a fixed
//! interval, reads the current guild count from a [`StatSource`] and hands
//! it to the dispatcher for concurrent delivery to every configured bot
//! list. Per-cycle and stat-source outcomes surface as typed
//! [`AutopostEvent`]s on a channel the caller subscribes to.
//!
//! Nothing a target or the stat source does can terminate the loop; only an
//! explicit [`Autoposter::stop`] ends it.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use toplist_autopost::{Autoposter, AutopostConfig, AutopostEvent, StatSource};
//! use toplist_client::{Dispatcher, DispatcherConfig};
//! use toplist_core::{BotList, PostPayload, TargetDescriptor};
//! use toplist_error::StatSourceError;
//!
//! struct FixedCount;
//!
//! #[async_trait]
//! impl StatSource for FixedCount {
//!     async fn stats(&self) -> Result<PostPayload, StatSourceError> {
//!         Ok(PostPayload::new(1500))
//!     }
//! }
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let targets = vec![TargetDescriptor::builder()
//!     .list(BotList::TopGg)
//!     .token(std::env::var("TOPGG_TOKEN")?)
//!     .bot_id("80351110224678912")
//!     .build()];
//! let dispatcher = Dispatcher::over_http(targets, DispatcherConfig::default())?;
//!
//! let autoposter = Autoposter::new(dispatcher, AutopostConfig::default());
//! let mut events = autoposter.start(Arc::new(FixedCount)).await?;
//!
//! while let Some(event) = events.recv().await {
//!     match event {
//!         AutopostEvent::CycleSuccess(result) => println!("posted at {}", result.timestamp),
//!         AutopostEvent::CycleError(result) => eprintln!("{} failures", result.failures().len()),
//!         AutopostEvent::StatSourceError(e) => eprintln!("count unavailable: {e}"),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod autoposter;
mod config;
mod event;
mod stat_source;

pub use autoposter::{Autoposter, AutopostState};
pub use config::AutopostConfig;
pub use event::AutopostEvent;
pub use stat_source::StatSource;
