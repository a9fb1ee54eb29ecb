//! reqwest-backed implementation of the upstream gateways.

use async_trait::async_trait;

use crate::domain::CreatedPool;
use crate::domain::gateways::{CountsGateway, PoolsGateway};
use crate::error::AppError;
use crate::infrastructure::backend::dto::{CountResponse, CreatePoolBody, CreatePoolResponse};

/// HTTP client for the bolão API.
///
/// Constructed once at startup from configuration and shared by every
/// request through the application state; there is no ambient singleton.
/// The underlying [`reqwest::Client`] carries the configured timeout and
/// connection pool.
pub struct HttpBackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackendClient {
    /// Creates a client rooted at `base_url`.
    ///
    /// A trailing slash on the base URL is tolerated and normalized away.
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetches one `{ "count": n }` endpoint.
    async fn fetch_count(&self, endpoint: &'static str) -> Result<u64, AppError> {
        let response = self.http.get(self.url(endpoint)).send().await?;

        if !response.status().is_success() {
            return Err(AppError::upstream_status(
                endpoint,
                response.status().as_u16(),
            ));
        }

        let body: CountResponse = response.json().await?;
        Ok(body.count)
    }
}

#[async_trait]
impl CountsGateway for HttpBackendClient {
    async fn pool_count(&self) -> Result<u64, AppError> {
        self.fetch_count("/pools/count").await
    }

    async fn guess_count(&self) -> Result<u64, AppError> {
        self.fetch_count("/guesses/count").await
    }

    async fn user_count(&self) -> Result<u64, AppError> {
        self.fetch_count("/users/count").await
    }
}

#[async_trait]
impl PoolsGateway for HttpBackendClient {
    async fn create_pool(&self, title: &str) -> Result<CreatedPool, AppError> {
        let response = self
            .http
            .post(self.url("/pools"))
            .json(&CreatePoolBody { title })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::upstream_status(
                "/pools",
                response.status().as_u16(),
            ));
        }

        let body: CreatePoolResponse = response.json().await?;
        Ok(CreatedPool::new(body.code))
    }
}
