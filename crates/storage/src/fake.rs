// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory cluster store for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use crate::record::PersistedCluster;
use crate::store::{ClusterStore, StoreError};
use parking_lot::Mutex;
use std::sync::Arc;

struct FakeStoreState {
    record: Option<PersistedCluster>,
    save_count: u32,
    fail_saves: bool,
    fail_loads: bool,
}

/// In-memory cluster store with failure injection.
#[derive(Clone)]
pub struct FakeClusterStore {
    inner: Arc<Mutex<FakeStoreState>>,
}

impl Default for FakeClusterStore {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeStoreState {
                record: None,
                save_count: 0,
                fail_saves: false,
                fail_loads: false,
            })),
        }
    }
}

impl FakeClusterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a record, as if a cluster had been armed before.
    pub fn with_record(record: PersistedCluster) -> Self {
        let store = Self::new();
        store.inner.lock().record = Some(record);
        store
    }

    /// Current record, if any.
    pub fn record(&self) -> Option<PersistedCluster> {
        self.inner.lock().record.clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> u32 {
        self.inner.lock().save_count
    }

    /// Make all subsequent saves fail.
    pub fn fail_saves(&self) {
        self.inner.lock().fail_saves = true;
    }

    /// Make all subsequent loads fail.
    pub fn fail_loads(&self) {
        self.inner.lock().fail_loads = true;
    }
}

impl ClusterStore for FakeClusterStore {
    fn load(&self) -> Result<Option<PersistedCluster>, StoreError> {
        let state = self.inner.lock();
        if state.fail_loads {
            return Err(StoreError::Unavailable("injected load failure".into()));
        }
        Ok(state.record.clone())
    }

    fn save(&self, record: &PersistedCluster) -> Result<(), StoreError> {
        let mut state = self.inner.lock();
        if state.fail_saves {
            return Err(StoreError::Unavailable("injected save failure".into()));
        }
        state.record = Some(record.clone());
        state.save_count += 1;
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.inner.lock().record = None;
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
