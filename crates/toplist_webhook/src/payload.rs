//! Site-specific webhook payloads and their normalization.

use serde::Deserialize;
use toplist_core::{BotList, VoteEvent};
use toplist_error::{WebhookError, WebhookErrorKind};

/// top.gg vote webhook body.
///
/// See the fields top.gg documents for its webhooks; `query` and `type`
/// ("upvote" or "test") are accepted but not carried into the normalized
/// event.
#[derive(Debug, Clone, Deserialize)]
pub struct TopGgVotePayload {
    /// ID of the bot that received the vote.
    pub bot: String,
    /// ID of the user who voted.
    pub user: String,
    /// "upvote" or "test".
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Weekend multiplier flag.
    #[serde(rename = "isWeekend", default)]
    pub is_weekend: bool,
    /// Query string the vote page was opened with.
    #[serde(default)]
    pub query: Option<String>,
}

impl TopGgVotePayload {
    /// Normalize into a [`VoteEvent`].
    pub fn into_event(self) -> VoteEvent {
        VoteEvent::new(BotList::TopGg, self.user, self.bot).with_weekend(self.is_weekend)
    }
}

/// discordbotlist.com vote webhook body.
///
/// Carries voter profile fields the normalized event does not need; only
/// the user ID survives normalization. The body has no bot ID, so the
/// receiver fills in its configured one.
#[derive(Debug, Clone, Deserialize)]
pub struct DblVotePayload {
    /// ID of the user who voted.
    pub id: String,
    /// Voter's username.
    #[serde(default)]
    pub username: Option<String>,
    /// Voter's avatar hash.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Whether the voter is a server admin.
    #[serde(default)]
    pub admin: Option<bool>,
}

impl DblVotePayload {
    /// Normalize into a [`VoteEvent`] for the given bot.
    pub fn into_event(self, bot_id: &str) -> VoteEvent {
        VoteEvent::new(BotList::Dbl, self.id, bot_id)
    }
}

/// Parse a site payload out of a raw body, mapping serde failures to a
/// 400-class webhook error.
pub(crate) fn parse<'a, T: Deserialize<'a>>(body: &'a [u8]) -> Result<T, WebhookError> {
    serde_json::from_slice(body)
        .map_err(|e| WebhookError::new(WebhookErrorKind::MalformedPayload(e.to_string())))
}
