// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt;

use policy_script::ScriptInterrupt;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Per-invocation cancellation signal and optional deadline
#[derive(Debug, Clone, Default)]
pub struct InvocationContext {
    pub cancellation: CancellationToken,
    pub deadline: Option<Instant>,
}

impl InvocationContext {
    pub fn new(cancellation: CancellationToken, deadline: Option<Instant>) -> Self {
        Self {
            cancellation,
            deadline,
        }
    }

    pub fn script_interrupt(&self) -> ScriptInterrupt {
        ScriptInterrupt::new(self.cancellation.clone(), self.deadline.map(Instant::into_std))
    }

    /// Resolves when the invocation is cancelled or its deadline passes,
    /// whichever happens first
    pub async fn interrupted(&self) -> InterruptCause {
        match self.deadline {
            Some(deadline) => tokio::select! {
                biased;
                () = self.cancellation.cancelled() => InterruptCause::Cancelled,
                () = tokio::time::sleep_until(deadline) => InterruptCause::DeadlineExceeded,
            },
            None => {
                self.cancellation.cancelled().await;
                InterruptCause::Cancelled
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InterruptCause {
    Cancelled,
    DeadlineExceeded,
}

impl fmt::Display for InterruptCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled => f.write_str("cancelled"),
            Self::DeadlineExceeded => f.write_str("deadline exceeded"),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
