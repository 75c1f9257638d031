//! In-memory vote cache.

use async_trait::async_trait;
use parking_lot::RwLock;
use toplist_core::VoteEvent;

/// A vote with its insertion sequence number.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedVote {
    /// Position in insertion order, starting at 0.
    pub number: u64,
    /// The vote itself.
    pub vote: VoteEvent,
}

/// Store for received votes, keyed by insertion order.
///
/// The webhook inserts every authenticated vote before handlers run, so a
/// bot can answer "who voted today" without re-deriving it from handler
/// side effects.
#[async_trait]
pub trait VoteCache: Send + Sync {
    /// Insert a vote, returning the sequence number it was assigned.
    async fn insert(&self, vote: VoteEvent) -> u64;

    /// Fetch one vote by sequence number.
    async fn fetchone(&self, number: u64) -> Option<CachedVote>;

    /// Fetch all cached votes in insertion order.
    async fn fetchmany(&self) -> Vec<CachedVote>;
}

/// Volatile vote cache; contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryVoteCache {
    votes: RwLock<Vec<CachedVote>>,
}

impl MemoryVoteCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VoteCache for MemoryVoteCache {
    async fn insert(&self, vote: VoteEvent) -> u64 {
        let mut votes = self.votes.write();
        let number = votes.len() as u64;
        votes.push(CachedVote { number, vote });
        number
    }

    async fn fetchone(&self, number: u64) -> Option<CachedVote> {
        self.votes.read().get(number as usize).cloned()
    }

    async fn fetchmany(&self) -> Vec<CachedVote> {
        self.votes.read().clone()
    }
}
