// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn record() -> PersistedCluster {
    PersistedCluster {
        wake_time: "2025-01-01T07:00:00Z".to_string(),
        interval_minutes: 1,
        alarm_count: 1,
        tone_pool: Vec::new(),
        active: true,
    }
}

#[test]
fn save_load_clear_cycle() {
    let store = FakeClusterStore::new();
    assert!(store.load().unwrap().is_none());

    store.save(&record()).unwrap();
    assert_eq!(store.load().unwrap(), Some(record()));
    assert_eq!(store.save_count(), 1);

    store.clear().unwrap();
    assert!(store.load().unwrap().is_none());
}

#[test]
fn injected_failures_surface_as_unavailable() {
    let store = FakeClusterStore::new();
    store.fail_saves();
    assert!(matches!(
        store.save(&record()),
        Err(StoreError::Unavailable(_))
    ));

    let store = FakeClusterStore::with_record(record());
    store.fail_loads();
    assert!(matches!(store.load(), Err(StoreError::Unavailable(_))));
}

#[test]
fn clones_share_the_record() {
    let store = FakeClusterStore::new();
    let view = store.clone();
    store.save(&record()).unwrap();
    assert!(view.record().is_some());
}
