//! Aggregate-counts loader.

use std::sync::Arc;

use crate::domain::AggregateCounts;
use crate::domain::gateways::CountsGateway;
use crate::error::AppError;

/// Service that assembles the landing page's counter snapshot.
///
/// Runs once per page request. The three upstream reads are issued
/// concurrently and joined; ordering between them is irrelevant, only joint
/// completion matters.
pub struct CountsService {
    gateway: Arc<dyn CountsGateway>,
}

impl CountsService {
    /// Creates a new counts service.
    pub fn new(gateway: Arc<dyn CountsGateway>) -> Self {
        Self { gateway }
    }

    /// Fetches the three counters and combines them into one snapshot.
    ///
    /// All-or-nothing: if any of the three fetches fails, the whole load
    /// fails and no partial structure is produced. The caller surfaces that
    /// as a page-generation failure. No retry is attempted.
    ///
    /// # Errors
    ///
    /// Returns the first [`AppError`] produced by a counter fetch.
    pub async fn load(&self) -> Result<AggregateCounts, AppError> {
        let (pool_count, guess_count, user_count) = tokio::try_join!(
            self.gateway.pool_count(),
            self.gateway.guess_count(),
            self.gateway.user_count(),
        )?;

        Ok(AggregateCounts {
            pool_count,
            guess_count,
            user_count,
        })
    }
}
