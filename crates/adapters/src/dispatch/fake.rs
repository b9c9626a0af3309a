// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake timer dispatch for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{DispatchError, TimerDispatch};
use async_trait::async_trait;
use parking_lot::Mutex;
use rouse_core::{SlotId, ToneRef};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

/// Recorded dispatch operation, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchCall {
    Arm {
        slot: SlotId,
        at_epoch_ms: u64,
        tone: ToneRef,
    },
    Cancel {
        slot: SlotId,
    },
}

/// A registration currently held by the fake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArmedSlot {
    pub at_epoch_ms: u64,
    pub tone: ToneRef,
}

struct FakeDispatchState {
    calls: Vec<DispatchCall>,
    armed: BTreeMap<SlotId, ArmedSlot>,
    fail_slots: HashSet<SlotId>,
}

/// Fake timer dispatch that records calls and tracks live registrations.
#[derive(Clone)]
pub struct FakeTimerDispatch {
    inner: Arc<Mutex<FakeDispatchState>>,
}

impl Default for FakeTimerDispatch {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeDispatchState {
                calls: Vec::new(),
                armed: BTreeMap::new(),
                fail_slots: HashSet::new(),
            })),
        }
    }
}

impl FakeTimerDispatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded operations, in order.
    pub fn calls(&self) -> Vec<DispatchCall> {
        self.inner.lock().calls.clone()
    }

    /// Registrations currently live (armed and not cancelled or replaced).
    pub fn armed(&self) -> BTreeMap<SlotId, ArmedSlot> {
        self.inner.lock().armed.clone()
    }

    /// Slots with a live registration, ascending.
    pub fn armed_slots(&self) -> Vec<SlotId> {
        self.inner.lock().armed.keys().copied().collect()
    }

    /// Make every subsequent arm of this slot fail registration.
    pub fn fail_slot(&self, slot: SlotId) {
        self.inner.lock().fail_slots.insert(slot);
    }
}

#[async_trait]
impl TimerDispatch for FakeTimerDispatch {
    async fn arm(
        &self,
        slot: SlotId,
        at_epoch_ms: u64,
        tone: ToneRef,
    ) -> Result<(), DispatchError> {
        let mut state = self.inner.lock();
        state.calls.push(DispatchCall::Arm {
            slot,
            at_epoch_ms,
            tone: tone.clone(),
        });
        if state.fail_slots.contains(&slot) {
            return Err(DispatchError::RegistrationFailed(format!(
                "injected failure for slot {slot}"
            )));
        }
        state.armed.insert(slot, ArmedSlot { at_epoch_ms, tone });
        Ok(())
    }

    async fn cancel(&self, slot: SlotId) -> Result<(), DispatchError> {
        let mut state = self.inner.lock();
        state.calls.push(DispatchCall::Cancel { slot });
        state.armed.remove(&slot);
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
