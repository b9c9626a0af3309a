// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    utc_marker     = { "2025-01-01T07:00:00Z", 1_735_714_800_000 },
    with_millis    = { "2025-01-01T07:00:00.250Z", 1_735_714_800_250 },
    epoch          = { "1970-01-01T00:00:00Z", 0 },
    offset_form    = { "2025-01-01T08:00:00+01:00", 1_735_714_800_000 },
)]
fn parses_iso8601_to_epoch_ms(text: &str, expected_ms: u64) {
    assert_eq!(parse_anchor(text).unwrap(), expected_ms);
}

#[yare::parameterized(
    empty          = { "" },
    garbage        = { "tomorrow at seven" },
    date_only      = { "2025-01-01" },
    no_offset      = { "2025-01-01T07:00:00" },
    pre_epoch      = { "1969-12-31T23:59:59Z" },
)]
fn rejects_unparsable_text(text: &str) {
    assert!(matches!(
        parse_anchor(text),
        Err(TimeParseError::InvalidTimeFormat(_))
    ));
}
