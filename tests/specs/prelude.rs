//! Shared harness for the engine specs.

use rouse_adapters::{FakePlayback, FakeTimerDispatch};
use rouse_core::{ClusterSpec, FakeClock, ToneRef};
use rouse_engine::{ClusterScheduler, RecoveryCoordinator};
use rouse_storage::JsonClusterStore;
use std::path::Path;
use std::sync::Arc;

pub const WAKE: &str = "2025-01-01T07:00:00Z";
pub const WAKE_MS: u64 = 1_735_714_800_000;
pub const HOUR_MS: u64 = 3_600_000;

pub fn store_at(dir: &Path) -> Arc<JsonClusterStore> {
    Arc::new(JsonClusterStore::new(dir.join("cluster.json")))
}

pub fn scheduler(
    store: Arc<JsonClusterStore>,
    dispatch: &FakeTimerDispatch,
    playback: &FakePlayback,
    now_ms: u64,
) -> ClusterScheduler<FakeTimerDispatch, FakePlayback, FakeClock> {
    ClusterScheduler::new(
        store,
        dispatch.clone(),
        playback.clone(),
        FakeClock::at_epoch_ms(now_ms),
    )
}

pub fn recovery(
    store: Arc<JsonClusterStore>,
    dispatch: &FakeTimerDispatch,
    now_ms: u64,
) -> RecoveryCoordinator<FakeTimerDispatch, FakeClock> {
    RecoveryCoordinator::new(store, dispatch.clone(), FakeClock::at_epoch_ms(now_ms))
}

pub fn spec(count: u32, tone_pool: Vec<ToneRef>) -> ClusterSpec {
    ClusterSpec {
        wake_time: WAKE.to_string(),
        interval_minutes: 10,
        count,
        tone_pool,
    }
}
