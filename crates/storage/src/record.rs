// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Durable cluster record.

use rouse_core::{ClusterSpec, ToneRef};
use serde::{Deserialize, Serialize};

/// The durable projection of the most recently requested cluster.
///
/// One record per store, overwritten by every scheduling request and read
/// once per restart by recovery. Only the generating parameters are
/// persisted; the trigger set is re-derived from them, so the record
/// reflects intent rather than armed-state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedCluster {
    /// Anchor timestamp text exactly as the caller supplied it.
    pub wake_time: String,
    pub interval_minutes: u32,
    pub alarm_count: u32,
    pub tone_pool: Vec<ToneRef>,
    /// True once armed. Cleared only by [`ClusterStore::clear`]; blanket
    /// cancellation leaves it set (see the engine's cancel semantics).
    ///
    /// [`ClusterStore::clear`]: crate::ClusterStore::clear
    pub active: bool,
}

impl PersistedCluster {
    /// Record for a freshly armed cluster.
    pub fn armed(spec: &ClusterSpec) -> Self {
        Self {
            wake_time: spec.wake_time.clone(),
            interval_minutes: spec.interval_minutes,
            alarm_count: spec.count,
            tone_pool: spec.tone_pool.clone(),
            active: true,
        }
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
