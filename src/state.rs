//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{CountsService, PoolService};

/// Handles to the application services, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub counts_service: Arc<CountsService>,
    pub pool_service: Arc<PoolService>,
}

impl AppState {
    pub fn new(counts_service: Arc<CountsService>, pool_service: Arc<PoolService>) -> Self {
        Self {
            counts_service,
            pool_service,
        }
    }
}
