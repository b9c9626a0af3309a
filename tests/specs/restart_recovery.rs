//! Recovery across a simulated process restart.
//!
//! A restart is modeled by dropping every in-memory object and rebuilding
//! from the record on disk with a fresh dispatch adapter; only the file
//! survives, as on a real device.

use crate::prelude::*;
use rouse_adapters::{FakePlayback, FakeTimerDispatch};
use rouse_core::{SlotId, ToneRef};
use rouse_engine::RecoveryOutcome;
use std::fs;
use tempfile::TempDir;

#[tokio::test]
async fn recovery_rearms_pending_triggers_from_disk() {
    let dir = TempDir::new().unwrap();
    {
        let dispatch = FakeTimerDispatch::new();
        let playback = FakePlayback::new();
        let pool = vec![ToneRef::new("a"), ToneRef::new("b")];
        scheduler(store_at(dir.path()), &dispatch, &playback, WAKE_MS - HOUR_MS)
            .arm(&spec(3, pool))
            .await
            .unwrap();
    }

    // Restart: fresh adapters, fresh store handle, same file
    let dispatch = FakeTimerDispatch::new();
    let report = recovery(store_at(dir.path()), &dispatch, WAKE_MS - HOUR_MS)
        .run()
        .await
        .unwrap();

    assert_eq!(report.outcome, RecoveryOutcome::Restored);
    assert_eq!(report.rearmed, 3);
    assert_eq!(
        dispatch.armed_slots(),
        vec![SlotId::new(0), SlotId::new(1), SlotId::new(2)]
    );
    // Recovery flattens tone assignment to the pool's first entry
    assert!(dispatch.armed().values().all(|slot| slot.tone.uri == "a"));
}

#[tokio::test]
async fn restart_after_missed_anchor_shifts_one_day() {
    let dir = TempDir::new().unwrap();
    {
        let dispatch = FakeTimerDispatch::new();
        let playback = FakePlayback::new();
        scheduler(store_at(dir.path()), &dispatch, &playback, WAKE_MS - HOUR_MS)
            .arm(&spec(2, Vec::new()))
            .await
            .unwrap();
    }

    // Device comes back an hour after the whole cluster should have fired
    let dispatch = FakeTimerDispatch::new();
    let report = recovery(store_at(dir.path()), &dispatch, WAKE_MS + HOUR_MS)
        .run()
        .await
        .unwrap();

    assert!(report.day_shifted);
    assert_eq!(report.rearmed, 2);
    assert_eq!(
        dispatch.armed()[&SlotId::new(0)].at_epoch_ms,
        WAKE_MS + 86_400_000
    );
}

#[tokio::test]
async fn cancel_then_restart_still_rearms_the_old_cluster() {
    let dir = TempDir::new().unwrap();
    {
        let dispatch = FakeTimerDispatch::new();
        let playback = FakePlayback::new();
        let scheduler = scheduler(store_at(dir.path()), &dispatch, &playback, WAKE_MS - HOUR_MS);
        scheduler.arm(&spec(2, Vec::new())).await.unwrap();
        scheduler.cancel_all().await;
        assert!(dispatch.armed_slots().is_empty());
    }

    // Blanket cancellation leaves the record active, so a restart restores
    // the cluster; callers wanting the stronger semantics clear the store
    let dispatch = FakeTimerDispatch::new();
    let report = recovery(store_at(dir.path()), &dispatch, WAKE_MS - HOUR_MS)
        .run()
        .await
        .unwrap();

    assert_eq!(report.outcome, RecoveryOutcome::Restored);
    assert_eq!(report.rearmed, 2);
}

#[tokio::test]
async fn corrupt_record_recovers_idle() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cluster.json");
    fs::write(&path, "{definitely not json").unwrap();

    let dispatch = FakeTimerDispatch::new();
    let report = recovery(store_at(dir.path()), &dispatch, WAKE_MS)
        .run()
        .await
        .unwrap();

    assert_eq!(report.outcome, RecoveryOutcome::Idle);
    assert!(dispatch.calls().is_empty());
    assert!(path.with_extension("bak").exists());
}
