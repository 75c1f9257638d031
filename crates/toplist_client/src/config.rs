//! Dispatcher configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use typed_builder::TypedBuilder;

/// Dispatcher tuning knobs.
///
/// # Examples
///
/// ```
/// use toplist_client::DispatcherConfig;
///
/// let config = DispatcherConfig::builder().timeout_seconds(3).build();
/// assert_eq!(config.timeout().as_secs(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
pub struct DispatcherConfig {
    /// Per-target timeout in seconds. Applies to each target's POST
    /// independently, never to the cycle as a whole.
    #[builder(default = 10)]
    #[serde(default = "default_timeout_seconds")]
    timeout_seconds: u64,
}

fn default_timeout_seconds() -> u64 {
    10
}

impl DispatcherConfig {
    /// Per-target timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
