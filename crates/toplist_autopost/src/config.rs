//! Autopost scheduler configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use typed_builder::TypedBuilder;

/// Scheduler tuning knobs.
///
/// # Examples
///
/// ```
/// use toplist_autopost::AutopostConfig;
///
/// let config = AutopostConfig::builder()
///     .interval_seconds(1800)
///     .immediate_first_cycle(false)
///     .build();
/// assert_eq!(config.interval().as_secs(), 1800);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
pub struct AutopostConfig {
    /// Seconds between cycles. Bot lists rate-limit stats posts; 900 (15
    /// minutes) is a safe floor for all three supported lists.
    #[builder(default = 900)]
    #[serde(default = "default_interval_seconds")]
    interval_seconds: u64,

    /// Run the first cycle immediately on `start` instead of waiting a full
    /// interval first.
    #[builder(default = true)]
    #[serde(default = "default_immediate_first_cycle")]
    immediate_first_cycle: bool,

    /// Capacity of the event channel. When a subscriber falls behind,
    /// further events are dropped with a warning rather than blocking the
    /// loop.
    #[builder(default = 32)]
    #[serde(default = "default_event_capacity")]
    event_capacity: usize,

    /// Keep the most recent cycle result readable via `last_cycle`. Set
    /// false for a zero-retention footprint.
    #[builder(default = true)]
    #[serde(default = "default_retain_last_cycle")]
    retain_last_cycle: bool,
}

fn default_interval_seconds() -> u64 {
    900
}

fn default_immediate_first_cycle() -> bool {
    true
}

fn default_event_capacity() -> usize {
    32
}

fn default_retain_last_cycle() -> bool {
    true
}

impl AutopostConfig {
    /// Interval between cycles as a `Duration`.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds)
    }

    /// Whether the first cycle runs immediately on start.
    pub fn immediate_first_cycle(&self) -> bool {
        self.immediate_first_cycle
    }

    /// Event channel capacity.
    pub fn event_capacity(&self) -> usize {
        self.event_capacity
    }

    /// Whether the most recent cycle result is retained.
    pub fn retain_last_cycle(&self) -> bool {
        self.retain_last_cycle
    }
}

impl Default for AutopostConfig {
    fn default() -> Self {
        Self {
            interval_seconds: default_interval_seconds(),
            immediate_first_cycle: default_immediate_first_cycle(),
            event_capacity: default_event_capacity(),
            retain_last_cycle: default_retain_last_cycle(),
        }
    }
}
