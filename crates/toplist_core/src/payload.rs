//! Stats payload construction and per-list serialization.

use crate::BotList;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A guild-count report, built fresh each cycle from the stat source.
///
/// # Examples
///
/// ```
/// use toplist_core::{BotList, PostPayload};
///
/// let payload = PostPayload::new(1500).with_shards(2);
/// let body = payload.to_body(BotList::TopGg);
/// assert_eq!(body["server_count"], 1500);
/// assert_eq!(body["shard_count"], 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPayload {
    /// Current guild count.
    pub server_count: u64,
    /// Shard count, if the bot is sharded.
    pub shard_count: Option<u64>,
}

impl PostPayload {
    /// Create a payload for an unsharded bot.
    pub fn new(server_count: u64) -> Self {
        Self {
            server_count,
            shard_count: None,
        }
    }

    /// Attach a shard count.
    pub fn with_shards(mut self, shard_count: u64) -> Self {
        self.shard_count = Some(shard_count);
        self
    }

    /// Serialize into the field names the given list expects.
    pub fn to_body(&self, list: BotList) -> Value {
        let mut body = Map::new();
        body.insert(
            list.count_field().to_string(),
            Value::from(self.server_count),
        );
        if let Some(shards) = self.shard_count {
            body.insert(list.shard_field().to_string(), Value::from(shards));
        }
        Value::Object(body)
    }
}
