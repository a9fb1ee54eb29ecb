//! HTTP server initialization and runtime setup.
//!
//! Wires the upstream API client into the services and runs the Axum
//! server until shutdown.

use crate::application::services::{CountsService, PoolService};
use crate::config::Config;
use crate::infrastructure::backend::HttpBackendClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The shared upstream HTTP client (one per process, dependency-injected)
/// - Counts and pool services
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_seconds))
        .build()?;

    let backend = Arc::new(HttpBackendClient::new(http, config.backend_api_url.clone()));
    tracing::info!("Upstream API client ready");

    let counts_service = Arc::new(CountsService::new(backend.clone()));
    let pool_service = Arc::new(PoolService::new(backend));

    let state = AppState::new(counts_service, pool_service);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
