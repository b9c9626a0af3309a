// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fire-time handling: urgent alert plus looping playback.

use rouse_adapters::{PlaybackAdapter, PresentAdapter};
use rouse_core::{FiredTrigger, ToneRef};
use tracing::{info, warn};

const ALERT_TITLE: &str = "Alarm";
const ALERT_BODY: &str = "Alarm ringing. Stop the alarm to silence it.";

/// Handles fired triggers.
///
/// Posts the alert and starts looping playback, substituting the system
/// fallback when the tone reference cannot be resolved. There is no caller
/// to report to at fire time, so failures are logged and swallowed.
pub struct FiredHandler<N, P> {
    present: N,
    playback: P,
}

impl<N, P> FiredHandler<N, P>
where
    N: PresentAdapter,
    P: PlaybackAdapter,
{
    pub fn new(present: N, playback: P) -> Self {
        Self { present, playback }
    }

    pub async fn handle(&self, trigger: FiredTrigger) {
        info!(slot = %trigger.slot, "alarm trigger fired");

        let tone = if trigger.tone.is_unresolvable() {
            warn!(slot = %trigger.slot, "tone unresolvable, playing system default");
            ToneRef::fallback()
        } else {
            trigger.tone
        };

        if let Err(e) = self.present.alert(ALERT_TITLE, ALERT_BODY).await {
            warn!(error = %e, "alarm alert failed");
        }
        if let Err(e) = self.playback.start(&tone).await {
            warn!(error = %e, "alarm playback failed to start");
        }
    }
}

#[cfg(test)]
#[path = "fired_tests.rs"]
mod tests;
