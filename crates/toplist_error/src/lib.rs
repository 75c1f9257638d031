//! Error types for the toplist library.
//!
//! This crate provides the foundation error types used throughout the
//! toplist workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use toplist_error::{ToplistResult, ClientError, ClientErrorKind};
//!
//! fn configure() -> ToplistResult<()> {
//!     Err(ClientError::new(ClientErrorKind::NoTargets))?
//! }
//!
//! match configure() {
//!     Ok(_) => println!("configured"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod autopost;
mod client;
mod error;
mod stat_source;
mod webhook;

pub use autopost::{AutopostError, AutopostErrorKind};
pub use client::{ClientError, ClientErrorKind};
pub use error::{ToplistError, ToplistErrorKind, ToplistResult};
pub use stat_source::StatSourceError;
pub use webhook::{WebhookError, WebhookErrorKind};
