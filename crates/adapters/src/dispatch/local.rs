// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-process timer dispatch backed by tokio sleep tasks.
//!
//! Stands in for a platform alarm service where none exists: each armed slot
//! is a spawned task that sleeps until its deadline and then delivers the
//! fired payload over a channel. Registrations do not survive the process;
//! durability comes from the persisted cluster record plus recovery, not
//! from this adapter.

use super::{DispatchError, TimerDispatch};
use async_trait::async_trait;
use parking_lot::Mutex;
use rouse_core::{Clock, FiredTrigger, SlotId, SystemClock, ToneRef};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Timer dispatch that fires triggers from within the current process.
#[derive(Clone)]
pub struct LocalTimerDispatch {
    fired_tx: mpsc::Sender<FiredTrigger>,
    clock: SystemClock,
    // Slot count is bounded by the cluster size cap, so entries are kept
    // until re-armed or cancelled rather than cleaned up on fire.
    tasks: Arc<Mutex<HashMap<SlotId, JoinHandle<()>>>>,
}

impl LocalTimerDispatch {
    /// Fired triggers are delivered on `fired_tx`; the receiving side owns
    /// presentation and playback.
    pub fn new(fired_tx: mpsc::Sender<FiredTrigger>) -> Self {
        Self {
            fired_tx,
            clock: SystemClock::new(),
            tasks: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl TimerDispatch for LocalTimerDispatch {
    async fn arm(
        &self,
        slot: SlotId,
        at_epoch_ms: u64,
        tone: ToneRef,
    ) -> Result<(), DispatchError> {
        // A deadline already in the past fires immediately.
        let delay = Duration::from_millis(at_epoch_ms.saturating_sub(self.clock.epoch_ms()));
        let fired_tx = self.fired_tx.clone();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            debug!(%slot, "local trigger fired");
            if fired_tx.send(FiredTrigger { slot, tone }).await.is_err() {
                warn!(%slot, "fired trigger dropped: no receiver");
            }
        });

        if let Some(previous) = self.tasks.lock().insert(slot, handle) {
            previous.abort();
        }
        Ok(())
    }

    async fn cancel(&self, slot: SlotId) -> Result<(), DispatchError> {
        if let Some(handle) = self.tasks.lock().remove(&slot) {
            handle.abort();
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "local_tests.rs"]
mod tests;
