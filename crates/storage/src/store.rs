// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cluster persistence.
//!
//! [`ClusterStore`] is the injected seam between the engine and durable
//! state: the scheduler writes through it, recovery reads through it.
//! Operations are synchronous local I/O, assumed fast.

use crate::record::PersistedCluster;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Errors from store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Durable key-value persistence for the single cluster record.
pub trait ClusterStore: Send + Sync {
    /// Read the record, if one has ever been saved.
    fn load(&self) -> Result<Option<PersistedCluster>, StoreError>;

    /// Write the record, replacing any previous one.
    fn save(&self, record: &PersistedCluster) -> Result<(), StoreError>;

    /// Remove the record entirely.
    fn clear(&self) -> Result<(), StoreError>;
}

/// File-backed store: one JSON document at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonClusterStore {
    path: PathBuf,
}

impl JsonClusterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ClusterStore for JsonClusterStore {
    /// Load the record if it exists.
    ///
    /// A corrupt file is moved aside to `.bak` and treated as absent, so a
    /// half-written or damaged record never wedges recovery.
    fn load(&self) -> Result<Option<PersistedCluster>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        match serde_json::from_reader(reader) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                let bak_path = self.path.with_extension("bak");
                warn!(
                    error = %e,
                    path = %self.path.display(),
                    bak = %bak_path.display(),
                    "Corrupt cluster record, moving to .bak and treating as absent",
                );
                fs::rename(&self.path, &bak_path)?;
                Ok(None)
            }
        }
    }

    /// Save atomically (write to .tmp, fsync, then rename).
    ///
    /// A crash during save leaves either the old record or the new one,
    /// never a torn file.
    fn save(&self, record: &PersistedCluster) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.path.with_extension("tmp");
        {
            let file = File::create(&tmp_path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer(&mut writer, record)?;
            let file = writer.into_inner().map_err(|e| e.into_error())?;
            file.sync_all()?;
        }
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
