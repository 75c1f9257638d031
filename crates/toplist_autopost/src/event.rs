//! Typed scheduler events.

use toplist_core::CycleResult;
use toplist_error::StatSourceError;

/// Events emitted by the autopost loop, one per completed or skipped cycle.
#[derive(Debug, Clone)]
pub enum AutopostEvent {
    /// Every target in the cycle accepted the post.
    CycleSuccess(CycleResult),

    /// At least one target failed; the result holds one outcome per target
    /// so subscribers can see which lists failed and why.
    CycleError(CycleResult),

    /// The stat source could not produce a count; the cycle was skipped and
    /// the dispatcher never invoked. The loop continues.
    StatSourceError(StatSourceError),
}

impl AutopostEvent {
    /// The cycle result carried by this event, if any.
    pub fn cycle_result(&self) -> Option<&CycleResult> {
        match self {
            Self::CycleSuccess(result) | Self::CycleError(result) => Some(result),
            Self::StatSourceError(_) => None,
        }
    }
}
