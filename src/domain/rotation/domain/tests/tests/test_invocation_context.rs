// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::time::Duration;

use dbinit_rotation::*;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test(start_paused = true))]
async fn test_cancellation_wins() {
    let ctx = InvocationContext::new(
        CancellationToken::new(),
        Some(Instant::now() + Duration::from_secs(10)),
    );
    ctx.cancellation.cancel();

    assert_eq!(ctx.interrupted().await, InterruptCause::Cancelled);
}

#[test_log::test(tokio::test(start_paused = true))]
async fn test_deadline() {
    let ctx = InvocationContext::new(
        CancellationToken::new(),
        Some(Instant::now() + Duration::from_secs(10)),
    );

    let start = Instant::now();
    assert_eq!(ctx.interrupted().await, InterruptCause::DeadlineExceeded);
    assert!(start.elapsed() >= Duration::from_secs(10));
}

#[test_log::test(tokio::test(start_paused = true))]
async fn test_no_deadline_waits_for_cancellation() {
    let ctx = InvocationContext::default();

    let waiter = {
        let ctx = ctx.clone();
        tokio::spawn(async move { ctx.interrupted().await })
    };

    tokio::time::sleep(Duration::from_secs(3600)).await;
    assert!(!waiter.is_finished());

    ctx.cancellation.cancel();
    assert_eq!(waiter.await.unwrap(), InterruptCause::Cancelled);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
