// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cluster parameters and validation.

use crate::tone::ToneRef;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound on the number of triggers in a cluster.
///
/// Blanket cancellation iterates exactly this many slots, so any count
/// accepted here is guaranteed to be fully cancellable later. The two sides
/// share this one constant; raising it changes both together.
pub const MAX_CLUSTER_SIZE: u32 = 50;

/// Errors from cluster validation
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("alarm count out of range (1..={MAX_CLUSTER_SIZE}): {0}")]
    CountOutOfRange(u32),
}

/// Immutable input to a scheduling request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterSpec {
    /// Anchor timestamp text as supplied by the caller (ISO-8601, UTC).
    /// Kept verbatim so the persisted record round-trips the caller's input.
    pub wake_time: String,
    /// Minutes between consecutive triggers. Zero collapses the cluster.
    pub interval_minutes: u32,
    /// Number of triggers, 1..=[`MAX_CLUSTER_SIZE`].
    pub count: u32,
    /// Ordered tone pool, assigned round-robin. May be empty.
    pub tone_pool: Vec<ToneRef>,
}

impl ClusterSpec {
    pub fn validate(&self) -> Result<(), SpecError> {
        if self.count == 0 || self.count > MAX_CLUSTER_SIZE {
            return Err(SpecError::CountOutOfRange(self.count));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "cluster_tests.rs"]
mod tests;
