//! Autopost loop lifecycle and event tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::timeout;

use toplist_autopost::{AutopostConfig, AutopostEvent, AutopostState, Autoposter, StatSource};
use toplist_client::{BotListApi, Dispatcher, DispatcherConfig};
use toplist_core::{BotList, Outcome, PostPayload, TargetDescriptor};
use toplist_error::{AutopostErrorKind, StatSourceError};

/// Bot-list API that counts calls and replies after a fixed delay.
struct CountingApi {
    calls: Arc<AtomicUsize>,
    delay: Duration,
    outcome: Outcome,
}

impl CountingApi {
    fn instant_success() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            delay: Duration::ZERO,
            outcome: Outcome::Success,
        }
    }

    fn slow_success(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            ..Self::instant_success()
        }
    }

    fn failing(status: u16) -> Self {
        Self {
            outcome: Outcome::Failure {
                status: Some(status),
                message: "rejected".to_string(),
            },
            ..Self::instant_success()
        }
    }

    fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl BotListApi for CountingApi {
    async fn post_stats(&self, _target: &TargetDescriptor, _payload: &PostPayload) -> Outcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.outcome.clone()
    }
}

struct FixedSource(u64);

#[async_trait]
impl StatSource for FixedSource {
    async fn stats(&self) -> Result<PostPayload, StatSourceError> {
        Ok(PostPayload::new(self.0))
    }
}

struct FailingSource {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl StatSource for FailingSource {
    async fn stats(&self) -> Result<PostPayload, StatSourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StatSourceError::new("gateway not ready"))
    }
}

fn targets() -> Vec<TargetDescriptor> {
    vec![
        TargetDescriptor::builder()
            .list(BotList::TopGg)
            .token("t1")
            .bot_id("1")
            .build(),
        TargetDescriptor::builder()
            .list(BotList::Dbl)
            .token("t2")
            .bot_id("1")
            .build(),
    ]
}

fn autoposter(api: CountingApi, config: AutopostConfig) -> Autoposter<CountingApi> {
    let dispatcher =
        Dispatcher::new(api, targets(), DispatcherConfig::default()).expect("valid targets");
    Autoposter::new(dispatcher, config)
}

#[tokio::test]
async fn test_immediate_first_cycle() {
    let poster = autoposter(
        CountingApi::instant_success(),
        AutopostConfig::builder()
            .interval_seconds(3600)
            .immediate_first_cycle(true)
            .build(),
    );

    let started = Instant::now();
    let mut events = poster.start(Arc::new(FixedSource(42))).await.expect("start");

    let event = timeout(Duration::from_secs(1), events.recv())
        .await
        .expect("first cycle should run immediately")
        .expect("loop alive");
    assert!(matches!(event, AutopostEvent::CycleSuccess(_)));
    assert!(started.elapsed() < Duration::from_secs(1));
    assert_eq!(poster.state(), AutopostState::Running);

    poster.stop(false).await.expect("stop");
}

#[tokio::test]
async fn test_delayed_first_cycle_waits_full_interval() {
    let poster = autoposter(
        CountingApi::instant_success(),
        AutopostConfig::builder()
            .interval_seconds(1)
            .immediate_first_cycle(false)
            .build(),
    );

    let mut events = poster.start(Arc::new(FixedSource(42))).await.expect("start");

    // Nothing before the first interval elapses.
    assert!(
        timeout(Duration::from_millis(500), events.recv()).await.is_err(),
        "no cycle should run before the first interval"
    );
    let event = timeout(Duration::from_secs(1), events.recv())
        .await
        .expect("cycle after first interval")
        .expect("loop alive");
    assert!(matches!(event, AutopostEvent::CycleSuccess(_)));

    poster.stop(false).await.expect("stop");
}

#[tokio::test]
async fn test_double_start_fails_and_leaves_loop_running() {
    let poster = autoposter(
        CountingApi::instant_success(),
        AutopostConfig::builder()
            .interval_seconds(1)
            .immediate_first_cycle(true)
            .build(),
    );

    let mut events = poster.start(Arc::new(FixedSource(42))).await.expect("start");
    timeout(Duration::from_secs(1), events.recv())
        .await
        .expect("first cycle")
        .expect("loop alive");

    let err = poster
        .start(Arc::new(FixedSource(42)))
        .await
        .err()
        .expect("second start must fail");
    assert_eq!(err.kind, AutopostErrorKind::AlreadyRunning);

    // Original loop keeps cycling.
    let event = timeout(Duration::from_secs(2), events.recv())
        .await
        .expect("loop unaffected by failed start")
        .expect("loop alive");
    assert!(matches!(event, AutopostEvent::CycleSuccess(_)));
    assert_eq!(poster.state(), AutopostState::Running);

    poster.stop(false).await.expect("stop");
}

#[tokio::test]
async fn test_graceful_stop_lets_cycle_finish() {
    let api = CountingApi::slow_success(300);
    let calls = api.calls();
    let poster = autoposter(
        api,
        AutopostConfig::builder()
            .interval_seconds(3600)
            .immediate_first_cycle(true)
            .build(),
    );

    let mut events = poster.start(Arc::new(FixedSource(42))).await.expect("start");

    // Let the first cycle get in flight, then stop gracefully.
    tokio::time::sleep(Duration::from_millis(50)).await;
    poster.stop(true).await.expect("graceful stop");

    // The in-flight cycle's event still fires, then the channel closes
    // without any further cycle.
    let event = timeout(Duration::from_secs(1), events.recv())
        .await
        .expect("in-flight cycle event")
        .expect("event before channel close");
    assert!(matches!(event, AutopostEvent::CycleSuccess(_)));
    assert!(events.recv().await.is_none(), "no new cycle after stop");
    assert_eq!(calls.load(Ordering::SeqCst), 2, "one cycle, two targets");
    assert_eq!(poster.state(), AutopostState::Stopped);
}

#[tokio::test]
async fn test_forced_stop_aborts_in_flight_cycle() {
    let poster = autoposter(
        CountingApi::slow_success(10_000),
        AutopostConfig::builder()
            .interval_seconds(3600)
            .immediate_first_cycle(true)
            .build(),
    );

    let _events = poster.start(Arc::new(FixedSource(42))).await.expect("start");
    tokio::time::sleep(Duration::from_millis(50)).await;

    let started = Instant::now();
    poster.stop(false).await.expect("forced stop");
    assert!(
        started.elapsed() < Duration::from_secs(1),
        "forced stop must not wait for the in-flight cycle"
    );
    assert_eq!(poster.state(), AutopostState::Stopped);
}

#[tokio::test]
async fn test_stat_source_failures_skip_cycles_and_keep_running() {
    let api = CountingApi::instant_success();
    let api_calls = api.calls();
    let poster = autoposter(
        api,
        AutopostConfig::builder()
            .interval_seconds(1)
            .immediate_first_cycle(true)
            .build(),
    );

    let source_calls = Arc::new(AtomicUsize::new(0));
    let source = FailingSource {
        calls: Arc::clone(&source_calls),
    };
    let mut events = poster.start(Arc::new(source)).await.expect("start");

    for _ in 0..3 {
        let event = timeout(Duration::from_secs(2), events.recv())
            .await
            .expect("stat source error event")
            .expect("loop alive");
        assert!(matches!(event, AutopostEvent::StatSourceError(_)));
    }

    assert_eq!(source_calls.load(Ordering::SeqCst), 3);
    assert_eq!(
        api_calls.load(Ordering::SeqCst),
        0,
        "dispatcher must not run when the stat source fails"
    );
    assert_eq!(poster.state(), AutopostState::Running);

    poster.stop(false).await.expect("stop");
}

#[tokio::test]
async fn test_cycle_error_event_and_last_cycle_retention() {
    let poster = autoposter(
        CountingApi::failing(401),
        AutopostConfig::builder()
            .interval_seconds(3600)
            .immediate_first_cycle(true)
            .build(),
    );

    assert!(poster.last_cycle().is_none());
    let mut events = poster.start(Arc::new(FixedSource(42))).await.expect("start");

    let event = timeout(Duration::from_secs(1), events.recv())
        .await
        .expect("cycle event")
        .expect("loop alive");
    let result = match event {
        AutopostEvent::CycleError(result) => result,
        other => panic!("expected CycleError, got {other:?}"),
    };
    assert_eq!(result.outcomes.len(), 2);
    assert_eq!(result.failures().len(), 2);

    let retained = poster.last_cycle().expect("last cycle retained");
    assert_eq!(retained, result);

    poster.stop(false).await.expect("stop");
}

#[tokio::test]
async fn test_retention_disabled_keeps_nothing() {
    let poster = autoposter(
        CountingApi::instant_success(),
        AutopostConfig::builder()
            .interval_seconds(3600)
            .immediate_first_cycle(true)
            .retain_last_cycle(false)
            .build(),
    );

    let mut events = poster.start(Arc::new(FixedSource(42))).await.expect("start");
    timeout(Duration::from_secs(1), events.recv())
        .await
        .expect("cycle event")
        .expect("loop alive");

    assert!(poster.last_cycle().is_none());
    poster.stop(false).await.expect("stop");
}

#[tokio::test]
async fn test_stop_when_idle_fails() {
    let poster = autoposter(CountingApi::instant_success(), AutopostConfig::default());
    let err = poster.stop(true).await.err().expect("stop must fail");
    assert_eq!(err.kind, AutopostErrorKind::NotRunning);
}

#[tokio::test]
async fn test_restart_after_stop() {
    let poster = autoposter(
        CountingApi::instant_success(),
        AutopostConfig::builder()
            .interval_seconds(3600)
            .immediate_first_cycle(true)
            .build(),
    );

    let mut events = poster.start(Arc::new(FixedSource(1))).await.expect("start");
    timeout(Duration::from_secs(1), events.recv())
        .await
        .expect("cycle")
        .expect("loop alive");
    poster.stop(true).await.expect("stop");

    let mut events = poster.start(Arc::new(FixedSource(2))).await.expect("restart");
    let event = timeout(Duration::from_secs(1), events.recv())
        .await
        .expect("cycle after restart")
        .expect("loop alive");
    assert!(matches!(event, AutopostEvent::CycleSuccess(_)));
    poster.stop(false).await.expect("stop");
}
