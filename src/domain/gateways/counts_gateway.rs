//! Gateway trait for the aggregate counter endpoints.

use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to the three upstream counter endpoints.
///
/// Each counter is a separate method so that every sub-fetch's failure mode
/// stays independently observable and testable; the loader decides how the
/// three are combined.
///
/// # Implementations
///
/// - [`crate::infrastructure::backend::HttpBackendClient`] - reqwest implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CountsGateway: Send + Sync {
    /// Number of pools created, from `GET /pools/count`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on transport failure and
    /// [`AppError::UpstreamStatus`] on a non-success response.
    async fn pool_count(&self) -> Result<u64, AppError>;

    /// Number of guesses submitted, from `GET /guesses/count`.
    ///
    /// # Errors
    ///
    /// Same as [`CountsGateway::pool_count`].
    async fn guess_count(&self) -> Result<u64, AppError>;

    /// Number of registered users, from `GET /users/count`.
    ///
    /// # Errors
    ///
    /// Same as [`CountsGateway::pool_count`].
    async fn user_count(&self) -> Result<u64, AppError>;
}
