// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timer dispatch adapters

mod local;
mod noop;

pub use local::LocalTimerDispatch;
pub use noop::NoOpTimerDispatch;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{ArmedSlot, DispatchCall, FakeTimerDispatch};

use async_trait::async_trait;
use rouse_core::{SlotId, ToneRef};
use thiserror::Error;

/// Errors from dispatch operations
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("registration failed: {0}")]
    RegistrationFailed(String),
    #[error("cancel failed: {0}")]
    CancelFailed(String),
}

/// Adapter over the platform's one-shot wake-trigger facility.
///
/// Each slot is one externally visible trigger identity: re-arming a slot
/// replaces its registration, never duplicates it, and cancelling a slot
/// that was never armed is a no-op.
#[async_trait]
pub trait TimerDispatch: Clone + Send + Sync + 'static {
    /// Register a one-shot trigger at an absolute wall-clock time, carrying
    /// the tone to play when it fires.
    async fn arm(&self, slot: SlotId, at_epoch_ms: u64, tone: ToneRef)
        -> Result<(), DispatchError>;

    /// Cancel a slot's registration, if any.
    async fn cancel(&self, slot: SlotId) -> Result<(), DispatchError>;
}
