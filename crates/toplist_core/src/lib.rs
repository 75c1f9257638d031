//! Core data types for the toplist bot-list client library.
//!
//! This crate provides the foundation data types shared by the dispatcher,
//! the autopost scheduler, and the vote webhook receiver.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cycle;
mod list;
mod payload;
mod target;
mod vote;

pub use cycle::{CycleResult, Outcome};
pub use list::BotList;
pub use payload::PostPayload;
pub use target::{Secret, TargetDescriptor};
pub use vote::VoteEvent;
