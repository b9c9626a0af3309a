//! Arming and re-arming against a real file-backed store.

use crate::prelude::*;
use rouse_adapters::{FakePlayback, FakeTimerDispatch};
use rouse_core::{SlotId, ToneRef};
use rouse_storage::ClusterStore;
use tempfile::TempDir;

#[tokio::test]
async fn arm_writes_a_durable_record() {
    let dir = TempDir::new().unwrap();
    let dispatch = FakeTimerDispatch::new();
    let playback = FakePlayback::new();
    let store = store_at(dir.path());
    let scheduler = scheduler(store, &dispatch, &playback, WAKE_MS - HOUR_MS);

    let pool = vec![ToneRef::named("content://tones/chime", "Chime")];
    scheduler.arm(&spec(3, pool.clone())).await.unwrap();

    // A fresh store instance on the same path sees the record
    let record = store_at(dir.path()).load().unwrap().unwrap();
    assert!(record.active);
    assert_eq!(record.wake_time, WAKE);
    assert_eq!(record.alarm_count, 3);
    assert_eq!(record.tone_pool, pool);
}

#[tokio::test]
async fn rearm_replaces_both_triggers_and_record() {
    let dir = TempDir::new().unwrap();
    let dispatch = FakeTimerDispatch::new();
    let playback = FakePlayback::new();
    let store = store_at(dir.path());
    let scheduler = scheduler(store.clone(), &dispatch, &playback, WAKE_MS - HOUR_MS);

    scheduler.arm(&spec(4, Vec::new())).await.unwrap();
    scheduler.arm(&spec(2, Vec::new())).await.unwrap();

    assert_eq!(
        dispatch.armed_slots(),
        vec![SlotId::new(0), SlotId::new(1)]
    );
    assert_eq!(store.load().unwrap().unwrap().alarm_count, 2);
}
