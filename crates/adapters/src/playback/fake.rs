// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake playback adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{PlaybackAdapter, PlaybackError};
use async_trait::async_trait;
use parking_lot::Mutex;
use rouse_core::ToneRef;
use std::sync::Arc;

/// Recorded playback operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackCall {
    Start(ToneRef),
    Stop,
}

struct FakePlaybackState {
    calls: Vec<PlaybackCall>,
    playing: Option<ToneRef>,
    fail_stops: bool,
}

/// Fake playback adapter that records calls and tracks the playing tone.
#[derive(Clone)]
pub struct FakePlayback {
    inner: Arc<Mutex<FakePlaybackState>>,
}

impl Default for FakePlayback {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakePlaybackState {
                calls: Vec::new(),
                playing: None,
                fail_stops: false,
            })),
        }
    }
}

impl FakePlayback {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded operations, in order.
    pub fn calls(&self) -> Vec<PlaybackCall> {
        self.inner.lock().calls.clone()
    }

    /// The tone currently looping, if any.
    pub fn playing(&self) -> Option<ToneRef> {
        self.inner.lock().playing.clone()
    }

    /// Make every subsequent stop fail.
    pub fn fail_stops(&self) {
        self.inner.lock().fail_stops = true;
    }
}

#[async_trait]
impl PlaybackAdapter for FakePlayback {
    async fn start(&self, tone: &ToneRef) -> Result<(), PlaybackError> {
        let mut state = self.inner.lock();
        state.calls.push(PlaybackCall::Start(tone.clone()));
        state.playing = Some(tone.clone());
        Ok(())
    }

    async fn stop(&self) -> Result<(), PlaybackError> {
        let mut state = self.inner.lock();
        state.calls.push(PlaybackCall::Stop);
        if state.fail_stops {
            return Err(PlaybackError::StopFailed("injected stop failure".into()));
        }
        state.playing = None;
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
