//! Gateway trait for pool creation.

use crate::domain::CreatedPool;
use crate::error::AppError;
use async_trait::async_trait;

/// Write access to the upstream pool collection.
///
/// # Implementations
///
/// - [`crate::infrastructure::backend::HttpBackendClient`] - reqwest implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PoolsGateway: Send + Sync {
    /// Creates a pool via `POST /pools` and returns its invite code.
    ///
    /// The title is forwarded exactly as entered, including empty or
    /// whitespace-only strings; any validation belongs to the upstream API.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on transport failure and
    /// [`AppError::UpstreamStatus`] when the upstream rejects the request.
    async fn create_pool(&self, title: &str) -> Result<CreatedPool, AppError>;
}
