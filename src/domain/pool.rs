//! Pool creation result.

/// A pool freshly created by the upstream API.
///
/// Only the invite code comes back from the create call; the pool itself
/// lives entirely upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedPool {
    /// Short upstream-generated string other users enter to join the pool.
    pub code: String,
}

impl CreatedPool {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}
