// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Anchor time parsing.
//!
//! The wake time crosses the API boundary as ISO-8601 text with a UTC
//! marker. Parsing is the only fallible step in trigger-time computation;
//! what to do on failure is the caller's policy (the scheduler degrades to a
//! near-future anchor, recovery aborts).

use chrono::DateTime;
use thiserror::Error;

/// Errors from anchor parsing
#[derive(Debug, Error)]
pub enum TimeParseError {
    #[error("invalid time format: {0}")]
    InvalidTimeFormat(String),
}

/// Parse an ISO-8601 timestamp into epoch milliseconds.
///
/// Accepts an offset suffix (`Z` or `+hh:mm`); the result is normalized to
/// UTC. Timestamps before the Unix epoch are rejected, since all trigger
/// arithmetic happens in unsigned epoch-millisecond space.
pub fn parse_anchor(text: &str) -> Result<u64, TimeParseError> {
    let parsed = DateTime::parse_from_rfc3339(text)
        .map_err(|e| TimeParseError::InvalidTimeFormat(format!("{text}: {e}")))?;
    u64::try_from(parsed.timestamp_millis())
        .map_err(|_| TimeParseError::InvalidTimeFormat(format!("{text}: before the unix epoch")))
}

#[cfg(test)]
#[path = "anchor_tests.rs"]
mod tests;
