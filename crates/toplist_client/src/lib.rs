//! Multi-target stats dispatcher.
//!
//! This crate fans one guild-count payload out to every configured bot-list
//! target concurrently, isolating failures per target: a timeout or error
//! response from one list is recorded as an outcome and never interferes
//! with the others.
//!
//! # Example
//!
//! ```no_run
//! use toplist_client::{Dispatcher, DispatcherConfig};
//! use toplist_core::{BotList, PostPayload, TargetDescriptor};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let targets = vec![
//!     TargetDescriptor::builder()
//!         .list(BotList::TopGg)
//!         .token(std::env::var("TOPGG_TOKEN")?)
//!         .bot_id("80351110224678912")
//!         .build(),
//! ];
//!
//! let dispatcher = Dispatcher::over_http(targets, DispatcherConfig::default())?;
//! let result = dispatcher.dispatch(&PostPayload::new(1500)).await;
//! assert_eq!(result.outcomes.len(), 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod config;
mod dispatcher;

pub use api::{BotListApi, HttpPoster};
pub use config::DispatcherConfig;
pub use dispatcher::Dispatcher;
