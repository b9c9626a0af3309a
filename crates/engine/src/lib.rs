// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Rouse alarm cluster scheduling engine

mod config;
mod error;
mod fired;
mod recovery;
mod scheduler;

pub use config::{ConfigError, EngineConfig};
pub use error::{ArmError, RecoveryError};
pub use fired::FiredHandler;
pub use recovery::{
    RecoveryCoordinator, RecoveryHandle, RecoveryOutcome, RecoveryReport, DEFAULT_RECOVERY_GRACE,
};
pub use scheduler::{ArmReceipt, ClusterScheduler, ANCHOR_FALLBACK_MS};
