// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Trigger identity and trigger-time generation.
//!
//! A cluster of `count` alarms is fully determined by its anchor time and
//! interval: trigger `i` fires at `anchor + i * interval` minutes. The slot
//! index doubles as the trigger's identity at the dispatch boundary and as
//! the round-robin selector into the tone pool. Re-arming a slot replaces
//! whatever was registered there; it never duplicates.

use crate::tone::{assign_tone, ToneRef};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MS_PER_MINUTE: u64 = 60_000;

/// Identity of one trigger slot within the cluster.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct SlotId(pub u32);

impl SlotId {
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SlotId {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

/// One trigger ready to hand to the dispatch layer.
///
/// Derived fresh on every scheduling or recovery pass; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArmedTrigger {
    pub slot: SlotId,
    /// Absolute fire time, epoch milliseconds.
    pub fire_at_ms: u64,
    pub tone: ToneRef,
}

/// Payload delivered when a trigger fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiredTrigger {
    pub slot: SlotId,
    pub tone: ToneRef,
}

/// Lazy sequence of the cluster's trigger times.
///
/// Yields exactly `count` non-decreasing epoch-millisecond timestamps spaced
/// `interval_minutes` apart. An interval of zero collapses every trigger onto
/// the anchor; that is accepted, not rejected.
pub fn trigger_times(
    anchor_ms: u64,
    interval_minutes: u32,
    count: u32,
) -> impl Iterator<Item = u64> {
    let step_ms = u64::from(interval_minutes) * MS_PER_MINUTE;
    (0..count).map(move |i| anchor_ms + u64::from(i) * step_ms)
}

/// Zip trigger times with round-robin tone assignment into armed triggers.
pub fn arm_triggers(
    anchor_ms: u64,
    interval_minutes: u32,
    count: u32,
    pool: &[ToneRef],
) -> impl Iterator<Item = ArmedTrigger> + '_ {
    let step_ms = u64::from(interval_minutes) * MS_PER_MINUTE;
    (0..count).map(move |i| ArmedTrigger {
        slot: SlotId::new(i),
        fire_at_ms: anchor_ms + u64::from(i) * step_ms,
        tone: assign_tone(pool, i as usize),
    })
}

#[cfg(test)]
#[path = "trigger_tests.rs"]
mod tests;
