// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op playback adapter.

use super::{PlaybackAdapter, PlaybackError};
use async_trait::async_trait;
use rouse_core::ToneRef;
use tracing::debug;

/// Playback adapter that discards all audio.
///
/// Used on hosts with no audio output wired up; the scheduling and recovery
/// paths are unaffected.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpPlayback;

impl NoOpPlayback {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PlaybackAdapter for NoOpPlayback {
    async fn start(&self, tone: &ToneRef) -> Result<(), PlaybackError> {
        debug!(uri = %tone.uri, "playback discarded");
        Ok(())
    }

    async fn stop(&self) -> Result<(), PlaybackError> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "noop_tests.rs"]
mod tests;
