//! The autopost loop and its lifecycle.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::{mpsc, watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

use crate::{AutopostConfig, AutopostEvent, StatSource};
use toplist_client::{BotListApi, Dispatcher};
use toplist_core::CycleResult;
use toplist_error::{AutopostError, AutopostErrorKind};

/// Lifecycle phase of an [`Autoposter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum AutopostState {
    /// Never started.
    Idle,
    /// The loop task is running.
    Running,
    /// The loop was stopped; `start` may be called again.
    Stopped,
}

struct RunningLoop {
    handle: JoinHandle<()>,
    shutdown: watch::Sender<bool>,
}

/// Posts guild counts to every configured bot list on a fixed interval.
///
/// One background task per instance. The loop's own task is the only
/// writer of the scheduler state and the retained cycle result; callers
/// read both through lock-guarded accessors.
pub struct Autoposter<A: BotListApi + 'static> {
    dispatcher: Arc<Dispatcher<A>>,
    config: AutopostConfig,
    state: Arc<RwLock<AutopostState>>,
    last_cycle: Arc<RwLock<Option<CycleResult>>>,
    running: Mutex<Option<RunningLoop>>,
}

impl<A: BotListApi + 'static> Autoposter<A> {
    /// Create an autoposter over a validated dispatcher.
    pub fn new(dispatcher: Dispatcher<A>, config: AutopostConfig) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            config,
            state: Arc::new(RwLock::new(AutopostState::Idle)),
            last_cycle: Arc::new(RwLock::new(None)),
            running: Mutex::new(None),
        }
    }

    /// Current lifecycle phase.
    pub fn state(&self) -> AutopostState {
        *self.state.read()
    }

    /// The most recent cycle result, if retention is enabled and at least
    /// one cycle has dispatched.
    pub fn last_cycle(&self) -> Option<CycleResult> {
        self.last_cycle.read().clone()
    }

    /// Start the autopost loop.
    ///
    /// Returns the event channel for this run. The first cycle runs
    /// immediately unless `immediate_first_cycle` is disabled, in which
    /// case the loop waits a full interval first.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyRunning` if called again without an intervening
    /// [`stop`](Self::stop); the original loop is unaffected.
    #[instrument(skip_all)]
    pub async fn start(
        &self,
        stat_source: Arc<dyn StatSource>,
    ) -> Result<mpsc::Receiver<AutopostEvent>, AutopostError> {
        let mut slot = self.running.lock().await;
        if let Some(run) = slot.as_ref() {
            if !run.handle.is_finished() {
                return Err(AutopostError::new(AutopostErrorKind::AlreadyRunning));
            }
        }

        let (event_tx, event_rx) = mpsc::channel(self.config.event_capacity());
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        *self.state.write() = AutopostState::Running;
        info!(
            interval_secs = self.config.interval().as_secs(),
            immediate = self.config.immediate_first_cycle(),
            targets = self.dispatcher.targets().len(),
            "Starting autopost loop"
        );

        let handle = tokio::spawn(run_loop(
            Arc::clone(&self.dispatcher),
            self.config.clone(),
            stat_source,
            event_tx,
            shutdown_rx,
            Arc::clone(&self.state),
            Arc::clone(&self.last_cycle),
        ));

        *slot = Some(RunningLoop {
            handle,
            shutdown: shutdown_tx,
        });
        Ok(event_rx)
    }

    /// Stop the autopost loop.
    ///
    /// With `graceful` set, an in-flight cycle finishes and its events
    /// still fire; this call returns once the loop task has exited, after
    /// which no new cycle begins. Without it, the loop task is aborted
    /// promptly, cancelling an in-flight interval wait or dispatch.
    ///
    /// # Errors
    ///
    /// Returns `NotRunning` if the loop is not running.
    #[instrument(skip(self))]
    pub async fn stop(&self, graceful: bool) -> Result<(), AutopostError> {
        let mut slot = self.running.lock().await;
        let Some(run) = slot.take() else {
            return Err(AutopostError::new(AutopostErrorKind::NotRunning));
        };

        if graceful {
            info!("Stopping autopost loop after in-flight cycle");
            let _ = run.shutdown.send(true);
            run.handle
                .await
                .map_err(|e| AutopostError::new(AutopostErrorKind::TaskFailed(e.to_string())))?;
        } else {
            info!("Aborting autopost loop");
            run.handle.abort();
            // Join error here is the abort itself.
            let _ = run.handle.await;
            *self.state.write() = AutopostState::Stopped;
        }
        Ok(())
    }
}

async fn run_loop(
    dispatcher: Arc<Dispatcher<impl BotListApi>>,
    config: AutopostConfig,
    stat_source: Arc<dyn StatSource>,
    event_tx: mpsc::Sender<AutopostEvent>,
    mut shutdown_rx: watch::Receiver<bool>,
    state: Arc<RwLock<AutopostState>>,
    last_cycle: Arc<RwLock<Option<CycleResult>>>,
) {
    let mut first = true;

    loop {
        if !(first && config.immediate_first_cycle()) {
            tokio::select! {
                _ = tokio::time::sleep(config.interval()) => {}
                _ = shutdown_rx.changed() => break,
            }
        }
        first = false;

        if *shutdown_rx.borrow() {
            break;
        }

        run_cycle(&dispatcher, &config, &stat_source, &event_tx, &last_cycle).await;

        if *shutdown_rx.borrow() {
            break;
        }
    }

    *state.write() = AutopostState::Stopped;
    info!("Autopost loop stopped");
}

async fn run_cycle(
    dispatcher: &Dispatcher<impl BotListApi>,
    config: &AutopostConfig,
    stat_source: &Arc<dyn StatSource>,
    event_tx: &mpsc::Sender<AutopostEvent>,
    last_cycle: &RwLock<Option<CycleResult>>,
) {
    let payload = match stat_source.stats().await {
        Ok(payload) => payload,
        Err(e) => {
            warn!(error = %e, "Stat source failed, skipping cycle");
            emit(event_tx, AutopostEvent::StatSourceError(e));
            return;
        }
    };

    debug!(server_count = payload.server_count, "Dispatching cycle");
    let result = dispatcher.dispatch(&payload).await;

    if config.retain_last_cycle() {
        *last_cycle.write() = Some(result.clone());
    }

    let event = if result.is_success() {
        AutopostEvent::CycleSuccess(result)
    } else {
        warn!(failures = result.failures().len(), "Cycle had failures");
        AutopostEvent::CycleError(result)
    };
    emit(event_tx, event);
}

/// Deliver an event without ever blocking the loop. A subscriber that has
/// fallen behind (or hung up) loses events, not the loop.
fn emit(event_tx: &mpsc::Sender<AutopostEvent>, event: AutopostEvent) {
    if let Err(e) = event_tx.try_send(event) {
        warn!(error = %e, "Dropping autopost event");
    }
}
