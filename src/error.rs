//! Service error type and its HTTP mapping.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

/// Errors produced while preparing a page or forwarding a form submission.
///
/// Every variant originates at the upstream bolão API boundary: this service
/// owns no storage and performs no business logic of its own.
#[derive(Debug, Error)]
pub enum AppError {
    /// Transport-level failure talking to the upstream API (connect error,
    /// timeout, malformed body).
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// The upstream API answered with a non-success status.
    #[error("upstream returned HTTP {status} for {endpoint}")]
    UpstreamStatus { endpoint: &'static str, status: u16 },
}

impl AppError {
    pub fn upstream_status(endpoint: &'static str, status: u16) -> Self {
        Self::UpstreamStatus { endpoint, status }
    }
}

/// Template for the full-page error response.
#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    status: u16,
    message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Both variants mean the page data could not be prepared. No partial
        // or default counters are substituted (see CountsService).
        let status = StatusCode::BAD_GATEWAY;
        let message = "Não foi possível carregar os dados do bolão. Tente novamente em instantes.";

        tracing::error!(error = %self, "page generation failed");

        let template = ErrorTemplate {
            status: status.as_u16(),
            message,
        };

        match template.render() {
            Ok(body) => (status, Html(body)).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "error page rendering failed");
                (status, message).into_response()
            }
        }
    }
}
