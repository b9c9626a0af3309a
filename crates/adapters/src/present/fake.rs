// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake presentation adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{PresentAdapter, PresentError};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

/// Recorded alert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertCall {
    pub title: String,
    pub body: String,
}

struct FakePresentState {
    calls: Vec<AlertCall>,
    fail_alerts: bool,
}

/// Fake presentation adapter that records alerts.
#[derive(Clone)]
pub struct FakePresentAdapter {
    inner: Arc<Mutex<FakePresentState>>,
}

impl Default for FakePresentAdapter {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakePresentState {
                calls: Vec::new(),
                fail_alerts: false,
            })),
        }
    }
}

impl FakePresentAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded alerts.
    pub fn calls(&self) -> Vec<AlertCall> {
        self.inner.lock().calls.clone()
    }

    /// Make every subsequent alert fail.
    pub fn fail_alerts(&self) {
        self.inner.lock().fail_alerts = true;
    }
}

#[async_trait]
impl PresentAdapter for FakePresentAdapter {
    async fn alert(&self, title: &str, body: &str) -> Result<(), PresentError> {
        let mut state = self.inner.lock();
        if state.fail_alerts {
            return Err(PresentError::AlertFailed("injected alert failure".into()));
        }
        state.calls.push(AlertCall {
            title: title.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
