//! Stat source trait.

use async_trait::async_trait;
use toplist_core::PostPayload;
use toplist_error::StatSourceError;

/// Supplies the current guild (and optionally shard) count each cycle.
///
/// Implemented by the host application over whatever bot framework it uses.
/// The source may fail, for example while the gateway connection is still
/// warming up; the scheduler treats that as a skipped cycle, never as a
/// reason to stop.
#[async_trait]
pub trait StatSource: Send + Sync {
    /// Read the current counts.
    async fn stats(&self) -> Result<PostPayload, StatSourceError>;
}
