// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::num::NonZeroU64;
use std::path::PathBuf;
use std::time::Duration;

use dbinit_rotation::{RotationConfig, ScriptLimits};
use observability::init::LogFormat;

use crate::{BINARY_NAME, VERSION};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Handles one cluster creation notification: replaces the master password
/// with a random one, then provisions application users and publishes their
/// credentials as directed by the policy scripts
#[derive(Debug, clap::Parser)]
#[command(name = BINARY_NAME, version = VERSION)]
pub struct Cli {
    /// Notification JSON file. Read from stdin when omitted or `-`.
    #[arg(long, short = 'e', env = "DBINIT_EVENT_FILE")]
    pub event_file: Option<PathBuf>,

    /// Script deciding whether the cluster is handled. Must set `result` to a
    /// bool.
    #[arg(long, env = "DBINIT_FILTER_SCRIPT", default_value = "")]
    pub filter_script: String,

    /// Script producing provisioning statements in `result`
    #[arg(long, env = "DBINIT_SQL_SCRIPT", default_value = "")]
    pub sql_script: String,

    /// Script producing `#{name, secret}` records in `result`
    #[arg(long, env = "DBINIT_SECRETS_SCRIPT", default_value = "")]
    pub secrets_script: String,

    /// Whitespace-separated user identifiers, each gets a generated password
    #[arg(long, env = "DBINIT_APPLICATION_USERS", default_value = "")]
    pub application_users: String,

    /// Pause after changing the master password
    #[arg(
        long,
        env = "DBINIT_PROPAGATION_DELAY",
        default_value = "60s",
        value_parser = humantime::parse_duration
    )]
    pub propagation_delay: Duration,

    /// Operation budget of a single script evaluation, must be positive
    #[arg(long, env = "DBINIT_SCRIPT_MAX_OPERATIONS", default_value = "10000000")]
    pub script_max_operations: NonZeroU64,

    /// Deadline for the whole invocation
    #[arg(long, env = "DBINIT_TIMEOUT", value_parser = humantime::parse_duration)]
    pub timeout: Option<Duration>,

    #[arg(long, env = "DBINIT_LOG_FORMAT", value_enum, default_value_t = LogFormatArg::Json)]
    pub log_format: LogFormatArg,
}

impl Cli {
    pub fn application_users(&self) -> Vec<String> {
        self.application_users
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    pub fn rotation_config(&self) -> RotationConfig {
        RotationConfig::new(
            self.filter_script.clone(),
            self.sql_script.clone(),
            self.secrets_script.clone(),
            self.application_users(),
        )
        .with_propagation_delay(self.propagation_delay)
        .with_script_limits(ScriptLimits {
            max_operations: self.script_max_operations.get(),
            ..ScriptLimits::default()
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Copy, Clone, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormatArg {
    Json,
    Pretty,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Json => LogFormat::Json,
            LogFormatArg::Pretty => LogFormat::Pretty,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
