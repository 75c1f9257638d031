//! Normalized vote notifications.

use crate::BotList;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A vote notification, normalized across bot-list webhook dialects.
///
/// # Examples
///
/// ```
/// use toplist_core::{BotList, VoteEvent};
///
/// let vote = VoteEvent::new(BotList::TopGg, "414159", "80351110224678912");
/// assert!(!vote.is_weekend);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteEvent {
    /// The list the vote was cast on.
    pub site: BotList,
    /// ID of the user who voted.
    pub user_id: String,
    /// ID of the bot that was voted for.
    pub bot_id: String,
    /// Whether the vote was cast during a weekend multiplier window.
    /// Only top.gg reports this; other lists default to false.
    pub is_weekend: bool,
    /// When the notification was received.
    pub time: DateTime<Utc>,
}

impl VoteEvent {
    /// Create a vote event stamped with the current time.
    pub fn new(site: BotList, user_id: impl Into<String>, bot_id: impl Into<String>) -> Self {
        Self {
            site,
            user_id: user_id.into(),
            bot_id: bot_id.into(),
            is_weekend: false,
            time: Utc::now(),
        }
    }

    /// Mark the vote as cast during a weekend window.
    pub fn with_weekend(mut self, is_weekend: bool) -> Self {
        self.is_weekend = is_weekend;
        self
    }
}
