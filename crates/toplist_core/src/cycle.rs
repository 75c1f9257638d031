//! Per-cycle dispatch results.

use crate::BotList;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The result of one target's stats post within a cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum Outcome {
    /// The list accepted the post.
    Success,
    /// The post failed; other targets in the cycle are unaffected.
    Failure {
        /// HTTP status code, absent for timeouts and transport errors.
        status: Option<u16>,
        /// Body-derived or transport error message.
        message: String,
    },
}

impl Outcome {
    /// Failure outcome for a target that exceeded its timeout.
    pub fn timeout() -> Self {
        Self::Failure {
            status: None,
            message: "timeout".to_string(),
        }
    }

    /// Whether this outcome is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Outcomes of one dispatch cycle, one entry per configured target.
///
/// Built once per cycle, handed to event subscribers, then dropped; the
/// scheduler retains at most the latest result.
///
/// # Examples
///
/// ```
/// use toplist_core::{BotList, CycleResult, Outcome};
///
/// let mut result = CycleResult::new();
/// result.record(BotList::TopGg, Outcome::Success);
/// result.record(BotList::Dbl, Outcome::timeout());
///
/// assert!(!result.is_success());
/// assert_eq!(result.failures().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleResult {
    /// When the cycle's dispatch completed.
    pub timestamp: DateTime<Utc>,
    /// Outcome per bot list.
    pub outcomes: HashMap<BotList, Outcome>,
}

impl CycleResult {
    /// Create an empty result stamped with the current time.
    pub fn new() -> Self {
        Self {
            timestamp: Utc::now(),
            outcomes: HashMap::new(),
        }
    }

    /// Record one target's outcome.
    pub fn record(&mut self, list: BotList, outcome: Outcome) {
        self.outcomes.insert(list, outcome);
    }

    /// Whether every target succeeded.
    pub fn is_success(&self) -> bool {
        self.outcomes.values().all(Outcome::is_success)
    }

    /// The targets that failed, with their outcomes.
    pub fn failures(&self) -> Vec<(BotList, &Outcome)> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| !outcome.is_success())
            .map(|(list, outcome)| (*list, outcome))
            .collect()
    }
}

impl Default for CycleResult {
    fn default() -> Self {
        Self::new()
    }
}
