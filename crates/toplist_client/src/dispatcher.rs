//! Concurrent fan-out of stats posts with per-target failure isolation.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tokio::time::timeout;
use tracing::{debug, instrument, warn};

use crate::{BotListApi, DispatcherConfig, HttpPoster};
use toplist_core::{CycleResult, Outcome, PostPayload, TargetDescriptor};
use toplist_error::{ClientError, ClientErrorKind};

/// Fans one payload out to every configured target concurrently.
///
/// Targets are validated once at construction: the set must be non-empty
/// and unique per bot list. After that, `dispatch` cannot fail; every
/// per-target problem is an [`Outcome::Failure`] in the returned
/// [`CycleResult`].
pub struct Dispatcher<A: BotListApi> {
    api: Arc<A>,
    targets: Vec<TargetDescriptor>,
    per_target_timeout: Duration,
}

impl Dispatcher<HttpPoster> {
    /// Create a dispatcher that posts over HTTP.
    pub fn over_http(
        targets: Vec<TargetDescriptor>,
        config: DispatcherConfig,
    ) -> Result<Self, ClientError> {
        Self::new(HttpPoster::new()?, targets, config)
    }
}

impl<A: BotListApi> Dispatcher<A> {
    /// Create a dispatcher over a custom API implementation.
    ///
    /// # Errors
    ///
    /// Returns an error if `targets` is empty or contains two descriptors
    /// for the same bot list.
    pub fn new(
        api: A,
        targets: Vec<TargetDescriptor>,
        config: DispatcherConfig,
    ) -> Result<Self, ClientError> {
        if targets.is_empty() {
            return Err(ClientError::new(ClientErrorKind::NoTargets));
        }

        let mut seen = HashSet::new();
        for target in &targets {
            if !seen.insert(*target.list()) {
                return Err(ClientError::new(ClientErrorKind::DuplicateTarget(
                    target.list().to_string(),
                )));
            }
        }

        Ok(Self {
            api: Arc::new(api),
            targets,
            per_target_timeout: config.timeout(),
        })
    }

    /// The configured targets.
    pub fn targets(&self) -> &[TargetDescriptor] {
        &self.targets
    }

    /// Post `payload` to every target and collect one outcome per target.
    ///
    /// All posts are issued together, so the cycle settles after the
    /// slowest single target (bounded by its own timeout), not the sum.
    /// Returns once every target has succeeded, failed, or timed out.
    #[instrument(skip(self, payload), fields(server_count = payload.server_count))]
    pub async fn dispatch(&self, payload: &PostPayload) -> CycleResult {
        let posts = self.targets.iter().map(|target| {
            let api = Arc::clone(&self.api);
            async move {
                let outcome = match timeout(self.per_target_timeout, api.post_stats(target, payload))
                    .await
                {
                    Ok(outcome) => outcome,
                    Err(_) => {
                        warn!(list = %target.list(), "Stats post timed out");
                        Outcome::timeout()
                    }
                };
                (*target.list(), outcome)
            }
        });

        let outcomes = join_all(posts).await;

        let mut result = CycleResult::new();
        for (list, outcome) in outcomes {
            result.record(list, outcome);
        }

        debug!(
            targets = result.outcomes.len(),
            failures = result.failures().len(),
            "Dispatch cycle settled"
        );
        result
    }
}
