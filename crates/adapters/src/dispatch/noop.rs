// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op timer dispatch.

use super::{DispatchError, TimerDispatch};
use async_trait::async_trait;
use rouse_core::{SlotId, ToneRef};

/// Timer dispatch that accepts every registration and never fires.
///
/// Used where no trigger backend is wired up, e.g. dry runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpTimerDispatch;

impl NoOpTimerDispatch {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TimerDispatch for NoOpTimerDispatch {
    async fn arm(
        &self,
        _slot: SlotId,
        _at_epoch_ms: u64,
        _tone: ToneRef,
    ) -> Result<(), DispatchError> {
        Ok(())
    }

    async fn cancel(&self, _slot: SlotId) -> Result<(), DispatchError> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "noop_tests.rs"]
mod tests;
