//! Bot-list target descriptors.

use crate::BotList;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// An API token whose `Debug` and `Display` output is redacted.
///
/// Tokens end up in target descriptors that get logged on setup; wrapping
/// them keeps the literal value out of log lines.
///
/// # Examples
///
/// ```
/// use toplist_core::Secret;
///
/// let secret = Secret::new("abc123");
/// assert_eq!(format!("{:?}", secret), "Secret(***)");
/// assert_eq!(secret.expose(), "abc123");
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    /// Wrap a token value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Access the underlying token value.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Secret(***)")
    }
}

impl std::fmt::Display for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "***")
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// One bot-list destination for stats posts.
///
/// Immutable once built; the autoposter owns its targets for the lifetime
/// of the loop.
///
/// # Examples
///
/// ```
/// use toplist_core::{BotList, TargetDescriptor};
///
/// let target = TargetDescriptor::builder()
///     .list(BotList::TopGg)
///     .token("topgg-token")
///     .bot_id("80351110224678912")
///     .build();
///
/// assert_eq!(*target.list(), BotList::TopGg);
/// assert_eq!(target.base_url(), "https://top.gg/api");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, TypedBuilder)]
pub struct TargetDescriptor {
    /// Which bot list this target posts to.
    list: BotList,

    /// API base URL. Defaults to the list's public endpoint; overridable
    /// for tests and proxies.
    #[builder(default, setter(strip_option, into))]
    #[serde(default)]
    base_url_override: Option<String>,

    /// API token for this list.
    #[builder(setter(into))]
    token: Secret,

    /// The bot's application ID.
    #[builder(setter(into))]
    bot_id: String,
}

impl TargetDescriptor {
    /// Effective API base URL for this target.
    pub fn base_url(&self) -> &str {
        self.base_url_override
            .as_deref()
            .unwrap_or_else(|| self.list.default_base_url())
    }

    /// Full URL of the stats endpoint for this target.
    pub fn stats_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url().trim_end_matches('/'),
            self.list.stats_path(&self.bot_id)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_redacts_debug() {
        let target = TargetDescriptor::builder()
            .list(BotList::Dbl)
            .token("super-secret")
            .bot_id("1")
            .build();
        let debugged = format!("{:?}", target);
        assert!(!debugged.contains("super-secret"));
    }

    #[test]
    fn test_base_url_override() {
        let target = TargetDescriptor::builder()
            .list(BotList::TopGg)
            .base_url_override("http://localhost:9999/api/")
            .token("t")
            .bot_id("7")
            .build();
        assert_eq!(target.stats_url(), "http://localhost:9999/api/bots/7/stats");
    }
}
