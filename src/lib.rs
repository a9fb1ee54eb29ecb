//! # bolao-web
//!
//! Server-rendered landing page for the bolão sports-prediction pools,
//! built with Axum and askama.
//!
//! ## Architecture
//!
//! The service is a thin backend-for-frontend in front of the bolão API:
//!
//! - **Domain Layer** ([`domain`]) - Core types and upstream gateway traits
//! - **Application Layer** ([`application`]) - Page-data loading and pool creation
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP client for the bolão API
//! - **Web Layer** ([`web`]) - Page handlers and askama templates
//!
//! ## Features
//!
//! - Landing page rendered server-side, with the three aggregate counters
//!   (pools, guesses, users) fetched from the upstream API per request
//! - Pool-creation form that forwards the title to the upstream API and
//!   hands the returned invite code back to the visitor (displayed and
//!   copied to the clipboard)
//! - Health endpoint reporting upstream reachability
//!
//! ## Quick Start
//!
//! ```bash
//! # Point the page at the bolão API
//! export BACKEND_API_URL="http://localhost:3333"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod web;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CountsService, PoolService};
    pub use crate::domain::{AggregateCounts, CreatedPool, Notification, NotificationKind};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
