// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Audio playback adapters

mod noop;

pub use noop::NoOpPlayback;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakePlayback, PlaybackCall};

use async_trait::async_trait;
use rouse_core::ToneRef;
use thiserror::Error;

/// Errors from playback operations
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("start failed: {0}")]
    StartFailed(String),
    #[error("stop failed: {0}")]
    StopFailed(String),
}

/// Adapter over the platform's audio output.
///
/// `start` loops the tone until `stop` is called; starting a new tone
/// replaces whatever is playing. Callers pass a resolvable tone (the
/// fire-time handler substitutes the fallback before calling in).
#[async_trait]
pub trait PlaybackAdapter: Clone + Send + Sync + 'static {
    async fn start(&self, tone: &ToneRef) -> Result<(), PlaybackError>;

    async fn stop(&self) -> Result<(), PlaybackError>;
}
