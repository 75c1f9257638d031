//! Supported bot-list services and their wire conventions.

use serde::{Deserialize, Serialize};

/// A bot-list service that accepts guild-count stats.
///
/// Each list speaks its own dialect: the path the stats POST goes to, the
/// JSON field name for the guild count, and the header carrying the API
/// token all differ per service. Those conventions live here so the
/// dispatcher stays a plain lookup.
///
/// # Examples
///
/// ```
/// use toplist_core::BotList;
///
/// assert_eq!(BotList::TopGg.stats_path("1234"), "/bots/1234/stats");
/// assert_eq!(BotList::Dbl.count_field(), "guilds");
/// assert_eq!(BotList::Dbgg.count_field(), "guildCount");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum BotList {
    /// discordbotlist.com
    #[strum(serialize = "discordbotlist.com")]
    Dbl,
    /// discord.bots.gg
    #[strum(serialize = "discord.bots.gg")]
    Dbgg,
    /// top.gg
    #[strum(serialize = "top.gg")]
    TopGg,
}

impl BotList {
    /// Default API base URL for this list.
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Self::Dbl => "https://discordbotlist.com/api/v1",
            Self::Dbgg => "https://discord.bots.gg/api/v1",
            Self::TopGg => "https://top.gg/api",
        }
    }

    /// Path of the stats endpoint relative to the base URL.
    pub fn stats_path(&self, bot_id: &str) -> String {
        format!("/bots/{bot_id}/stats")
    }

    /// JSON field name carrying the guild count.
    pub fn count_field(&self) -> &'static str {
        match self {
            Self::Dbl => "guilds",
            Self::Dbgg => "guildCount",
            Self::TopGg => "server_count",
        }
    }

    /// JSON field name carrying the shard count, when supplied.
    pub fn shard_field(&self) -> &'static str {
        match self {
            Self::Dbl => "shard_count",
            Self::Dbgg => "shardCount",
            Self::TopGg => "shard_count",
        }
    }

    /// Header carrying the API token.
    pub fn auth_header(&self) -> &'static str {
        "Authorization"
    }
}
