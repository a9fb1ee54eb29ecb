//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::state::AppState;

/// Service health report.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// Per-dependency check results.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub upstream: CheckStatus,
}

/// Result of a single dependency check.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: upstream API reachable
/// - **503 Service Unavailable**: upstream degraded
///
/// The upstream check exercises the same three counter endpoints the
/// landing page depends on, so a healthy response means the page can
/// actually render.
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let upstream_check = check_upstream(&state).await;

    let all_healthy = upstream_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            upstream: upstream_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks upstream reachability by loading the counter snapshot.
async fn check_upstream(state: &AppState) -> CheckStatus {
    match state.counts_service.load().await {
        Ok(counts) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!(
                "Counter endpoints reachable ({} pools)",
                counts.pool_count
            )),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Upstream error: {}", e)),
        },
    }
}
