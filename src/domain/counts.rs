//! Aggregate counters displayed on the landing page.

/// Snapshot of the three display counters, built once per page request.
///
/// The counters have no relationship beyond co-display; they are fetched
/// from three independent upstream endpoints and combined here. The
/// structure is never mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateCounts {
    /// Pools created across the product.
    pub pool_count: u64,
    /// Guesses submitted across all pools.
    pub guess_count: u64,
    /// Registered users.
    pub user_count: u64,
}
