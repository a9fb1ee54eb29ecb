//! Pool creation service.

use std::sync::Arc;

use crate::domain::CreatedPool;
use crate::domain::gateways::PoolsGateway;
use crate::error::AppError;

/// Service that forwards pool creation to the upstream API.
///
/// No precondition is enforced on the title: empty and whitespace-only
/// titles are sent as-is, and any validation is the upstream's
/// responsibility. Concurrent submissions are not serialized here either;
/// the upstream owns deduplication.
pub struct PoolService {
    gateway: Arc<dyn PoolsGateway>,
}

impl PoolService {
    /// Creates a new pool service.
    pub fn new(gateway: Arc<dyn PoolsGateway>) -> Self {
        Self { gateway }
    }

    /// Creates a pool with the given title and returns its invite code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on transport failure and
    /// [`AppError::UpstreamStatus`] when the upstream rejects the request.
    pub async fn create_pool(&self, title: &str) -> Result<CreatedPool, AppError> {
        self.gateway.create_pool(title).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::MockPoolsGateway;

    #[tokio::test]
    async fn test_create_pool_returns_invite_code() {
        let mut mock_gateway = MockPoolsGateway::new();

        mock_gateway
            .expect_create_pool()
            .withf(|title| title == "Bolão da firma")
            .times(1)
            .returning(|_| Ok(CreatedPool::new("ABC123")));

        let service = PoolService::new(Arc::new(mock_gateway));

        let created = service.create_pool("Bolão da firma").await.unwrap();

        assert_eq!(created.code, "ABC123");
    }

    #[tokio::test]
    async fn test_create_pool_forwards_empty_title() {
        let mut mock_gateway = MockPoolsGateway::new();

        // Empty titles are not rejected on this side.
        mock_gateway
            .expect_create_pool()
            .withf(|title| title.is_empty())
            .times(1)
            .returning(|_| Ok(CreatedPool::new("EMPTY1")));

        let service = PoolService::new(Arc::new(mock_gateway));

        let created = service.create_pool("").await.unwrap();

        assert_eq!(created.code, "EMPTY1");
    }

    #[tokio::test]
    async fn test_create_pool_propagates_upstream_rejection() {
        let mut mock_gateway = MockPoolsGateway::new();

        mock_gateway
            .expect_create_pool()
            .times(1)
            .returning(|_| Err(AppError::upstream_status("/pools", 422)));

        let service = PoolService::new(Arc::new(mock_gateway));

        let result = service.create_pool("My Pool").await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::UpstreamStatus { status: 422, .. }
        ));
    }
}
