// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Used when `RUST_LOG` is not set
pub const DEFAULT_LOGGING_CONFIG: &str = "info";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line on stdout, for log collectors
    #[default]
    Json,
    /// Human-readable multi-line output on stderr
    Pretty,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Installs the global subscriber and redirects `log` records into it.
///
/// Does nothing when a subscriber is already set, which happens when running
/// under tests.
pub fn init_logging(format: LogFormat) -> Result<(), InitLoggingError> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    // Use configuration from RUST_LOG env var if provided
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOGGING_CONFIG));

    LogTracer::init()?;

    match format {
        LogFormat::Json => {
            let subscriber = tracing_subscriber::registry().with(env_filter).with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_writer(std::io::stdout),
            );
            tracing::subscriber::set_global_default(subscriber)?;
        }
        LogFormat::Pretty => {
            let subscriber = tracing_subscriber::registry().with(env_filter).with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_writer(std::io::stderr),
            );
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum InitLoggingError {
    #[error("Failed to redirect log records")]
    LogTracer(#[from] tracing_log::log::SetLoggerError),

    #[error("Failed to install the global subscriber")]
    Subscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
