// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use rouse_adapters::{FakePlayback, FakePresentAdapter, PlaybackCall};
use rouse_core::SlotId;

fn fired(uri: &str) -> FiredTrigger {
    FiredTrigger {
        slot: SlotId::new(0),
        tone: ToneRef::new(uri),
    }
}

#[tokio::test]
async fn posts_alert_and_starts_playback() {
    let present = FakePresentAdapter::new();
    let playback = FakePlayback::new();
    let handler = FiredHandler::new(present.clone(), playback.clone());

    handler.handle(fired("content://tones/chime")).await;

    assert_eq!(present.calls().len(), 1);
    assert_eq!(
        playback.playing(),
        Some(ToneRef::new("content://tones/chime"))
    );
}

#[tokio::test]
async fn unresolvable_tone_plays_system_default() {
    let present = FakePresentAdapter::new();
    let playback = FakePlayback::new();
    let handler = FiredHandler::new(present.clone(), playback.clone());

    handler.handle(fired("")).await;

    assert_eq!(playback.playing(), Some(ToneRef::fallback()));
}

#[tokio::test]
async fn alert_failure_does_not_stop_playback() {
    let present = FakePresentAdapter::new();
    present.fail_alerts();
    let playback = FakePlayback::new();
    let handler = FiredHandler::new(present, playback.clone());

    handler.handle(fired("content://tones/chime")).await;

    assert_eq!(
        playback.calls(),
        vec![PlaybackCall::Start(ToneRef::new("content://tones/chime"))]
    );
}
