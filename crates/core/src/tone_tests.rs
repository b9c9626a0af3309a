// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn pool() -> Vec<ToneRef> {
    vec![
        ToneRef::named("content://tones/chime", "Chime"),
        ToneRef::new("content://tones/pulse"),
        ToneRef::named("content://tones/horn", "Horn"),
    ]
}

#[yare::parameterized(
    first        = { 0, "content://tones/chime" },
    second       = { 1, "content://tones/pulse" },
    third        = { 2, "content://tones/horn" },
    wraps        = { 3, "content://tones/chime" },
    wraps_twice  = { 7, "content://tones/pulse" },
)]
fn assignment_rotates_through_pool(index: usize, expected_uri: &str) {
    assert_eq!(assign_tone(&pool(), index).uri, expected_uri);
}

#[test]
fn assignment_is_periodic_in_pool_length() {
    let pool = pool();
    for index in 0..10 {
        assert_eq!(
            assign_tone(&pool, index),
            assign_tone(&pool, index + pool.len())
        );
    }
}

#[test]
fn empty_pool_yields_fallback_for_every_index() {
    for index in [0, 1, 49] {
        let tone = assign_tone(&[], index);
        assert_eq!(tone.uri, FALLBACK_TONE_URI);
    }
}

#[test]
fn empty_uri_is_unresolvable() {
    assert!(ToneRef::new("").is_unresolvable());
    assert!(!ToneRef::fallback().is_unresolvable());
}

#[test]
fn serializes_as_uri_name_pairs() {
    let json = serde_json::to_value(pool()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"uri": "content://tones/chime", "name": "Chime"},
            {"uri": "content://tones/pulse"},
            {"uri": "content://tones/horn", "name": "Horn"},
        ])
    );
}
