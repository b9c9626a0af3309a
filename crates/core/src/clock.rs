// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction for testable time.
//!
//! All time reads in the engine go through [`Clock`] so that scheduling and
//! recovery logic can be driven deterministically in tests. `epoch_ms` is the
//! wall-clock side (trigger timestamps are absolute epoch milliseconds);
//! `now` is the monotonic side.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

/// Source of the current time.
pub trait Clock: Clone + Send + Sync + 'static {
    /// Current monotonic instant.
    fn now(&self) -> Instant;

    /// Current wall-clock time as milliseconds since the Unix epoch.
    fn epoch_ms(&self) -> u64;
}

/// Clock backed by the real system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn epoch_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Manually advanced clock for tests.
#[cfg(any(test, feature = "test-support"))]
#[derive(Clone)]
pub struct FakeClock {
    start: Instant,
    inner: std::sync::Arc<parking_lot::Mutex<FakeClockState>>,
}

#[cfg(any(test, feature = "test-support"))]
struct FakeClockState {
    elapsed: Duration,
    epoch_base_ms: u64,
}

#[cfg(any(test, feature = "test-support"))]
impl FakeClock {
    /// Clock starting at epoch-millisecond zero.
    pub fn new() -> Self {
        Self::at_epoch_ms(0)
    }

    /// Clock whose wall time starts at the given epoch milliseconds.
    pub fn at_epoch_ms(epoch_ms: u64) -> Self {
        Self {
            start: Instant::now(),
            inner: std::sync::Arc::new(parking_lot::Mutex::new(FakeClockState {
                elapsed: Duration::ZERO,
                epoch_base_ms: epoch_ms,
            })),
        }
    }

    /// Move both the monotonic and wall clock forward.
    pub fn advance(&self, by: Duration) {
        self.inner.lock().elapsed += by;
    }
}

#[cfg(any(test, feature = "test-support"))]
impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl Clock for FakeClock {
    fn now(&self) -> Instant {
        self.start + self.inner.lock().elapsed
    }

    fn epoch_ms(&self) -> u64 {
        let state = self.inner.lock();
        state.epoch_base_ms + state.elapsed.as_millis() as u64
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
