//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ```bash
//! export BACKEND_API_URL="http://localhost:3333"
//! ```
//!
//! ## Required Variables
//!
//! - `BACKEND_API_URL` - Base URL of the bolão API
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `HTTP_TIMEOUT_SECONDS` - Timeout for upstream API requests (default: 10)

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the upstream bolão API.
    pub backend_api_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Timeout in seconds applied to every upstream API request.
    /// No retries are performed; a timed-out request fails the operation.
    pub http_timeout_seconds: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `BACKEND_API_URL` is missing.
    pub fn from_env() -> Result<Self> {
        let backend_api_url =
            env::var("BACKEND_API_URL").context("BACKEND_API_URL must be set")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let http_timeout_seconds = env::var("HTTP_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Ok(Self {
            backend_api_url,
            listen_addr,
            log_level,
            log_format,
            http_timeout_seconds,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `BACKEND_API_URL` is not an HTTP(S) URL
    /// - `LOG_FORMAT` is not `text` or `json`
    /// - `LISTEN` is not in `host:port` form
    /// - `HTTP_TIMEOUT_SECONDS` is out of range
    pub fn validate(&self) -> Result<()> {
        if !self.backend_api_url.starts_with("http://")
            && !self.backend_api_url.starts_with("https://")
        {
            anyhow::bail!(
                "BACKEND_API_URL must start with 'http://' or 'https://', got '{}'",
                self.backend_api_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.http_timeout_seconds == 0 || self.http_timeout_seconds > 120 {
            anyhow::bail!(
                "HTTP_TIMEOUT_SECONDS must be between 1 and 120, got {}",
                self.http_timeout_seconds
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Backend API: {}", self.backend_api_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Upstream timeout: {}s", self.http_timeout_seconds);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
