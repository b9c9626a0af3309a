// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Restart recovery: reconstruct and re-arm the persisted cluster.
//!
//! Runs once per restart signal. The registered triggers die with the
//! process; the persisted record does not, so the pass re-derives the
//! trigger set from the record, drops what already elapsed, and hands the
//! rest back to the dispatch layer.

use crate::error::RecoveryError;
use rouse_adapters::TimerDispatch;
use rouse_core::{parse_anchor, trigger_times, Clock, SlotId, ToneRef};
use rouse_storage::ClusterStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Shift applied when the whole base time has already elapsed: try the same
/// wall-clock time tomorrow. A coarse rule, not recurrence.
const ONE_DAY_MS: u64 = 86_400_000;

/// Default bound on how long a recovery pass may run before it is abandoned.
pub const DEFAULT_RECOVERY_GRACE: Duration = Duration::from_secs(30);

/// What a recovery pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryOutcome {
    /// No record, or the record was not active.
    Idle,
    /// The cluster was regenerated and its pending triggers re-armed.
    Restored,
}

/// Summary of one recovery pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoveryReport {
    pub outcome: RecoveryOutcome,
    /// True when the base time had passed and the sequence moved one day on.
    pub day_shifted: bool,
    pub rearmed: u32,
    pub skipped_past: u32,
    pub failed: u32,
}

impl RecoveryReport {
    fn idle() -> Self {
        Self {
            outcome: RecoveryOutcome::Idle,
            day_shifted: false,
            rearmed: 0,
            skipped_past: 0,
            failed: 0,
        }
    }
}

/// Rebuilds the armed cluster from the store after a restart.
pub struct RecoveryCoordinator<D, C> {
    store: Arc<dyn ClusterStore>,
    dispatch: D,
    clock: C,
}

impl<D, C> RecoveryCoordinator<D, C>
where
    D: TimerDispatch,
    C: Clock,
{
    pub fn new(store: Arc<dyn ClusterStore>, dispatch: D, clock: C) -> Self {
        Self {
            store,
            dispatch,
            clock,
        }
    }

    /// Run one recovery pass.
    ///
    /// An absent or inactive record means nothing to do. An unparsable
    /// stored wake time aborts with no rescheduling; there is no safe
    /// anchor to guess at this stage.
    pub async fn run(&self) -> Result<RecoveryReport, RecoveryError> {
        let Some(record) = self.store.load()? else {
            debug!("no persisted cluster, nothing to restore");
            return Ok(RecoveryReport::idle());
        };
        if !record.active {
            debug!("persisted cluster inactive, nothing to restore");
            return Ok(RecoveryReport::idle());
        }

        let mut anchor_epoch_ms = parse_anchor(&record.wake_time)?;
        let now_ms = self.clock.epoch_ms();

        let day_shifted = anchor_epoch_ms < now_ms;
        if day_shifted {
            warn!(
                wake_time = %record.wake_time,
                "stored wake time already past, shifting one day forward"
            );
            anchor_epoch_ms += ONE_DAY_MS;
        }

        // Every slot is re-armed with the pool's first tone. The rotation
        // used when the cluster was first armed is not reconstructed on
        // this path.
        let tone = record
            .tone_pool
            .first()
            .cloned()
            .unwrap_or_else(ToneRef::fallback);

        let mut rearmed = 0u32;
        let mut skipped_past = 0u32;
        let mut failed = 0u32;
        for (index, fire_at_ms) in
            trigger_times(anchor_epoch_ms, record.interval_minutes, record.alarm_count).enumerate()
        {
            if fire_at_ms < now_ms {
                skipped_past += 1;
                continue;
            }
            let slot = SlotId::new(index as u32);
            match self.dispatch.arm(slot, fire_at_ms, tone.clone()).await {
                Ok(()) => rearmed += 1,
                Err(e) => {
                    warn!(%slot, error = %e, "re-arm refused, skipping slot");
                    failed += 1;
                }
            }
        }

        info!(rearmed, skipped_past, failed, day_shifted, "alarm cluster restored");
        Ok(RecoveryReport {
            outcome: RecoveryOutcome::Restored,
            day_shifted,
            rearmed,
            skipped_past,
            failed,
        })
    }

    /// Run recovery on a background task, bounded by `grace`.
    ///
    /// Restart-signal handlers have a strict wall-clock budget, so this
    /// returns immediately. The returned handle acknowledges completion on
    /// every exit path, including errors and the grace period expiring.
    pub fn spawn(self, grace: Duration) -> RecoveryHandle {
        let (tx, rx) = oneshot::channel();
        let handle = tokio::spawn(async move {
            let result = match tokio::time::timeout(grace, self.run()).await {
                Ok(result) => result,
                Err(_) => Err(RecoveryError::GraceExceeded),
            };
            let _ = tx.send(result);
        });
        RecoveryHandle {
            receiver: rx,
            handle,
        }
    }
}

/// Completion acknowledgment for a spawned recovery pass.
pub struct RecoveryHandle {
    receiver: oneshot::Receiver<Result<RecoveryReport, RecoveryError>>,
    // NOTE(lifetime): Keep task alive
    #[allow(dead_code)]
    handle: JoinHandle<()>,
}

impl RecoveryHandle {
    /// Wait for the pass to acknowledge completion.
    pub async fn wait(self) -> Result<RecoveryReport, RecoveryError> {
        self.receiver
            .await
            .map_err(|_| RecoveryError::Failed("recovery task dropped before acknowledging".into()))?
    }
}

#[cfg(test)]
#[path = "recovery_tests.rs"]
mod tests;
