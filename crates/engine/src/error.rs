// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the engine

use rouse_core::{SpecError, TimeParseError};
use rouse_storage::StoreError;
use thiserror::Error;

/// Errors that fail an arm request outright.
///
/// Time-parse and per-slot dispatch failures are deliberately absent: an
/// unparsable wake time degrades the anchor instead of failing, and a
/// refused registration skips that slot only.
#[derive(Debug, Error)]
pub enum ArmError {
    #[error("invalid cluster spec: {0}")]
    InvalidSpec(#[from] SpecError),
    #[error("persistence unavailable: {0}")]
    Store(#[from] StoreError),
}

/// Errors that abort a recovery pass.
#[derive(Debug, Error)]
pub enum RecoveryError {
    #[error("persistence unavailable: {0}")]
    Store(#[from] StoreError),
    #[error("stored wake time unusable: {0}")]
    TimeParse(#[from] TimeParseError),
    #[error("recovery did not finish within the grace period")]
    GraceExceeded,
    #[error("recovery failed: {0}")]
    Failed(String),
}
