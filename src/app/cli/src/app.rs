// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::path::Path;
use std::process::ExitCode;

use aws_config::SdkConfig;
use database_common::SqlxDatabaseConnector;
use dbinit_rotation::*;
use dill::{Catalog, CatalogBuilder};
use internal_error::{InternalError, ResultIntoInternal};
use tokio::io::AsyncReadExt as _;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::Cli;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const BINARY_NAME: &str = "dbinit";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn run(cli: Cli) -> ExitCode {
    if let Err(err) = observability::init::init_logging(cli.log_format.into()) {
        eprintln!("{BINARY_NAME}: {err}");
        return ExitCode::FAILURE;
    }
    observability::panic_handler::set_hook_trace_panics(false);

    tracing::info!(
        version = VERSION,
        application_users = ?cli.application_users(),
        propagation_delay = ?cli.propagation_delay,
        timeout = ?cli.timeout,
        "Initializing {BINARY_NAME}"
    );

    let payload = match read_event_payload(cli.event_file.as_deref()).await {
        Ok(payload) => payload,
        Err(err) => {
            let err = RotateClusterCredentialsError::Internal(err);
            log_failure(&err, None);
            return ExitCode::FAILURE;
        }
    };

    // Nothing external is contacted until the notification is known to be valid
    let (event, cluster_identifier) = match parse_event(&payload) {
        Ok(parsed) => parsed,
        Err(err) => {
            log_failure(&err.into(), None);
            return ExitCode::FAILURE;
        }
    };

    let sdk_config = dbinit_adapter_aws::load_aws_sdk_config().await;
    let mut catalog_builder = configure_base_catalog(cli.rotation_config());
    configure_aws_components(&mut catalog_builder, sdk_config);
    let catalog = catalog_builder.build();

    let ctx = invocation_context(cli.timeout);
    cancel_on_ctrl_c(ctx.cancellation.clone());

    match rotate_event(&catalog, &event, &ctx).await {
        Ok(outcome) => {
            tracing::info!(?outcome, "Invocation finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log_failure(&err, Some(&cluster_identifier));
            ExitCode::FAILURE
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Rotation services and configuration. Collaborator adapters are added
/// separately.
pub fn configure_base_catalog(config: RotationConfig) -> CatalogBuilder {
    let mut b = CatalogBuilder::new();

    b.add_value(config);
    dbinit_rotation_services::register_dependencies(&mut b);

    b
}

pub fn configure_aws_components(catalog_builder: &mut CatalogBuilder, sdk_config: SdkConfig) {
    catalog_builder.add::<SqlxDatabaseConnector>();
    dbinit_adapter_aws::register_dependencies(catalog_builder, sdk_config);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Parses the notification and runs the rotation use case
pub async fn rotate(
    catalog: &Catalog,
    payload: &[u8],
    ctx: &InvocationContext,
) -> Result<RotationOutcome, RotateClusterCredentialsError> {
    let (event, _) = parse_event(payload)?;

    rotate_event(catalog, &event, ctx).await
}

pub async fn rotate_event(
    catalog: &Catalog,
    event: &ClusterCreatedEvent,
    ctx: &InvocationContext,
) -> Result<RotationOutcome, RotateClusterCredentialsError> {
    let use_case = catalog
        .get_one::<dyn RotateClusterCredentialsUseCase>()
        .int_err()?;

    use_case.execute(event, ctx).await
}

/// Decodes the notification and checks that it names a cluster
pub fn parse_event(
    payload: &[u8],
) -> Result<(ClusterCreatedEvent, ClusterIdentifier), MalformedEventError> {
    let event = ClusterCreatedEvent::from_slice(payload)?;
    let cluster_identifier = event.cluster_identifier()?;

    tracing::info!(%cluster_identifier, "Cluster creation event received");

    Ok((event, cluster_identifier))
}

pub fn invocation_context(timeout: Option<std::time::Duration>) -> InvocationContext {
    InvocationContext::new(
        CancellationToken::new(),
        timeout.map(|timeout| Instant::now() + timeout),
    )
}

fn cancel_on_ctrl_c(cancellation: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupt received, cancelling the invocation");
            cancellation.cancel();
        }
    });
}

async fn read_event_payload(path: Option<&Path>) -> Result<Vec<u8>, InternalError> {
    match path {
        Some(path) if path != Path::new("-") => tokio::fs::read(path)
            .await
            .context_int_err(format!("reading {}", path.display())),
        _ => {
            let mut payload = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut payload)
                .await
                .context_int_err("reading stdin")?;
            Ok(payload)
        }
    }
}

/// The single structured record describing a failed invocation
pub fn log_failure(
    err: &RotateClusterCredentialsError,
    cluster_identifier: Option<&ClusterIdentifier>,
) {
    let error_chain = error_chain(err);

    match cluster_identifier {
        Some(cluster_identifier) => tracing::error!(
            error_category = err.category(),
            error = %error_chain,
            %cluster_identifier,
            "Invocation failed"
        ),
        None => tracing::error!(
            error_category = err.category(),
            error = %error_chain,
            "Invocation failed"
        ),
    }
}

/// Joins the messages of the error and all of its sources
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut chain = err.to_string();
    let mut source = err.source();
    while let Some(err) = source {
        chain.push_str(": ");
        chain.push_str(&err.to_string());
        source = err.source();
    }
    chain
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
