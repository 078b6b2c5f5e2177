//! Shared test utilities.

#![allow(dead_code)]

use std::time::Duration;

use elmtui::mvu::StateStream;

/// Receive the next published state, failing the test after a timeout.
pub async fn next_state<S>(stream: &mut StateStream<S>) -> S {
    tokio::time::timeout(Duration::from_secs(5), stream.next())
        .await
        .expect("timed out waiting for a published state")
        .expect("state stream ended unexpectedly")
}

/// Assert that the stream ends (store halted or dropped) within a timeout.
pub async fn expect_stream_end<S>(stream: &mut StateStream<S>) {
    let ended = tokio::time::timeout(Duration::from_secs(5), async {
        while stream.next().await.is_some() {}
    })
    .await;
    assert!(ended.is_ok(), "state stream did not end");
}

/// Assert that nothing further is published within a short window.
pub async fn expect_quiet<S>(stream: &mut StateStream<S>) {
    let outcome = tokio::time::timeout(Duration::from_millis(200), stream.next()).await;
    assert!(outcome.is_err(), "expected no further published state");
}
