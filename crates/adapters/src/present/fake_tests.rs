// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test]
async fn records_alerts() {
    let present = FakePresentAdapter::new();

    present.alert("Alarm", "ringing").await.unwrap();

    assert_eq!(
        present.calls(),
        vec![AlertCall {
            title: "Alarm".to_string(),
            body: "ringing".to_string(),
        }]
    );
}

#[tokio::test]
async fn injected_failure_records_nothing() {
    let present = FakePresentAdapter::new();
    present.fail_alerts();

    assert!(matches!(
        present.alert("Alarm", "ringing").await,
        Err(PresentError::AlertFailed(_))
    ));
    assert!(present.calls().is_empty());
}
