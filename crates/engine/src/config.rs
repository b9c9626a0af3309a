// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine configuration

use crate::recovery::DEFAULT_RECOVERY_GRACE;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors from configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine a state directory")]
    NoStateDir,
}

/// Engine path and timing configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Path of the persisted cluster record
    pub store_path: PathBuf,
    /// How long a recovery pass may run before it is abandoned
    pub recovery_grace: Duration,
}

impl EngineConfig {
    /// Load configuration under the user state directory
    /// (`$XDG_STATE_HOME/rouse/` or `~/.local/state/rouse/`).
    pub fn load() -> Result<Self, ConfigError> {
        let state_dir = state_dir()?;
        Ok(Self {
            store_path: state_dir.join("cluster.json"),
            recovery_grace: DEFAULT_RECOVERY_GRACE,
        })
    }
}

fn state_dir() -> Result<PathBuf, ConfigError> {
    dirs::state_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local").join("state")))
        .map(|dir| dir.join("rouse"))
        .ok_or(ConfigError::NoStateDir)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
