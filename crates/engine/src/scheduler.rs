// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cluster scheduling: validate, cancel, persist, arm.

use crate::error::ArmError;
use rouse_adapters::{PlaybackAdapter, TimerDispatch};
use rouse_core::{arm_triggers, parse_anchor, Clock, ClusterSpec, SlotId, MAX_CLUSTER_SIZE};
use rouse_storage::{ClusterStore, PersistedCluster};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Offset applied to "now" when the supplied wake time cannot be parsed.
pub const ANCHOR_FALLBACK_MS: u64 = 60_000;

/// Outcome of a successful arm request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArmReceipt {
    /// Resolved anchor, epoch milliseconds.
    pub anchor_epoch_ms: u64,
    /// True when the wake time failed to parse and the anchor was degraded
    /// to now + 60 seconds.
    pub anchor_degraded: bool,
    /// Slots registered with the dispatch layer.
    pub armed: u32,
    /// Slots whose registration was refused.
    pub failed: u32,
}

/// Orchestrates arm, blanket-cancel, and stop-sound requests.
///
/// One cluster is live at a time: every arm replaces whatever came before
/// it, across restarts, via the injected store.
pub struct ClusterScheduler<D, P, C> {
    store: Arc<dyn ClusterStore>,
    dispatch: D,
    playback: P,
    clock: C,
}

impl<D, P, C> ClusterScheduler<D, P, C>
where
    D: TimerDispatch,
    P: PlaybackAdapter,
    C: Clock,
{
    pub fn new(store: Arc<dyn ClusterStore>, dispatch: D, playback: P, clock: C) -> Self {
        Self {
            store,
            dispatch,
            playback,
            clock,
        }
    }

    /// Arm a new cluster, replacing any previously armed one.
    ///
    /// Ordering is the correctness property here: the previous cluster is
    /// cancelled before the new record is written, and the record is
    /// written before any trigger is registered. A crash at any point
    /// leaves at most one, possibly stale, cluster; the record reflects
    /// intent and recovery re-derives the rest.
    pub async fn arm(&self, spec: &ClusterSpec) -> Result<ArmReceipt, ArmError> {
        spec.validate()?;

        let (anchor_epoch_ms, anchor_degraded) = match parse_anchor(&spec.wake_time) {
            Ok(ms) => (ms, false),
            Err(e) => {
                warn!(
                    wake_time = %spec.wake_time,
                    error = %e,
                    "wake time unparsable, arming at now + 60s"
                );
                (self.clock.epoch_ms() + ANCHOR_FALLBACK_MS, true)
            }
        };

        self.cancel_all().await;
        self.store.save(&PersistedCluster::armed(spec))?;

        let mut armed = 0u32;
        let mut failed = 0u32;
        for trigger in arm_triggers(
            anchor_epoch_ms,
            spec.interval_minutes,
            spec.count,
            &spec.tone_pool,
        ) {
            match self
                .dispatch
                .arm(trigger.slot, trigger.fire_at_ms, trigger.tone)
                .await
            {
                Ok(()) => armed += 1,
                Err(e) => {
                    warn!(
                        slot = %trigger.slot,
                        error = %e,
                        "trigger registration refused, skipping slot"
                    );
                    failed += 1;
                }
            }
        }

        info!(armed, failed, anchor_epoch_ms, anchor_degraded, "alarm cluster armed");
        Ok(ArmReceipt {
            anchor_epoch_ms,
            anchor_degraded,
            armed,
            failed,
        })
    }

    /// Cancel every slot this engine could ever have armed.
    ///
    /// Blanket cancellation over the full `0..MAX_CLUSTER_SIZE` range needs
    /// no memory of what was armed; cancelling a never-armed slot is a
    /// no-op at the dispatch layer, so calling this twice is safe. The
    /// persisted record is left untouched, `active` flag included.
    pub async fn cancel_all(&self) {
        for index in 0..MAX_CLUSTER_SIZE {
            if let Err(e) = self.dispatch.cancel(SlotId::new(index)).await {
                debug!(slot = index, error = %e, "cancel refused");
            }
        }
        debug!("all alarm slots cancelled");
    }

    /// Ask the playback layer to stop the currently sounding alarm.
    ///
    /// Best-effort: failures are logged, never surfaced.
    pub async fn stop_active_sound(&self) {
        if let Err(e) = self.playback.stop().await {
            warn!(error = %e, "failed to stop active alarm sound");
        }
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
