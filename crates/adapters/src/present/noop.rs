// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op presentation adapter.

use super::{PresentAdapter, PresentError};
use async_trait::async_trait;

/// Presentation adapter that silently discards all alerts.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpPresentAdapter;

impl NoOpPresentAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PresentAdapter for NoOpPresentAdapter {
    async fn alert(&self, _title: &str, _body: &str) -> Result<(), PresentError> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "noop_tests.rs"]
mod tests;
