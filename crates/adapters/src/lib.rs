// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for external I/O: timer dispatch, presentation, playback

pub mod dispatch;
pub mod playback;
pub mod present;

pub use dispatch::{DispatchError, LocalTimerDispatch, NoOpTimerDispatch, TimerDispatch};
pub use playback::{NoOpPlayback, PlaybackAdapter, PlaybackError};
pub use present::{DesktopPresentAdapter, NoOpPresentAdapter, PresentAdapter, PresentError};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use dispatch::{ArmedSlot, DispatchCall, FakeTimerDispatch};
#[cfg(any(test, feature = "test-support"))]
pub use playback::{FakePlayback, PlaybackCall};
#[cfg(any(test, feature = "test-support"))]
pub use present::{AlertCall, FakePresentAdapter};
