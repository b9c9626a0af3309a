// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Presentation adapters for the fire-time alarm takeover

mod desktop;
mod noop;

pub use desktop::DesktopPresentAdapter;
pub use noop::NoOpPresentAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{AlertCall, FakePresentAdapter};

use async_trait::async_trait;
use thiserror::Error;

/// Errors from presentation operations
#[derive(Debug, Error)]
pub enum PresentError {
    #[error("alert failed: {0}")]
    AlertFailed(String),
}

/// Adapter for the urgent, user-facing alarm presentation.
#[async_trait]
pub trait PresentAdapter: Clone + Send + Sync + 'static {
    /// Post the alarm alert with a title and message body.
    async fn alert(&self, title: &str, body: &str) -> Result<(), PresentError>;
}
