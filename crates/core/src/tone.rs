// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tone references and round-robin tone assignment.
//!
//! A cluster carries an ordered pool of tones; trigger index `i` plays
//! `pool[i % pool.len()]`. An empty pool is not an error: every trigger then
//! falls back to the system default tone.

use serde::{Deserialize, Serialize};

/// URI of the platform default alarm tone, used when a cluster has no pool
/// or a tone cannot be resolved at fire time.
pub const FALLBACK_TONE_URI: &str = "system:default-alarm";

/// Reference to an alarm tone: a playback URI plus an optional display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneRef {
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ToneRef {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            name: None,
        }
    }

    pub fn named(uri: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            name: Some(name.into()),
        }
    }

    /// The defined system fallback tone.
    pub fn fallback() -> Self {
        Self::named(FALLBACK_TONE_URI, "System default")
    }

    /// True when the reference cannot be resolved to an audio source and the
    /// playback layer must substitute the fallback.
    pub fn is_unresolvable(&self) -> bool {
        self.uri.is_empty()
    }
}

/// Assign a tone to a trigger index, rotating through the pool.
///
/// Total: an empty pool yields [`ToneRef::fallback`] for every index.
pub fn assign_tone(pool: &[ToneRef], index: usize) -> ToneRef {
    if pool.is_empty() {
        return ToneRef::fallback();
    }
    pool[index % pool.len()].clone()
}

#[cfg(test)]
#[path = "tone_tests.rs"]
mod tests;
