//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`            - Landing page (counters fetched per request)
//! - `POST /pools`       - Pool-creation form submission
//! - `GET  /health`      - Health check: upstream API reachability
//! - `/static/*`         - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::state::AppState;
use crate::web::handlers::{create_pool_handler, health_handler, home_handler};
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::LatencyUnit;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(home_handler))
        .route("/pools", post(create_pool_handler))
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(trace_layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Request/response tracing middleware.
///
/// Spans at `INFO` level with method, path and version; responses logged
/// with status code and latency in milliseconds.
fn trace_layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
