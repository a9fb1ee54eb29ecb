#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use bolao_web::application::services::{CountsService, PoolService};
use bolao_web::infrastructure::backend::HttpBackendClient;
use bolao_web::state::AppState;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds an [`AppState`] whose gateways talk to the given wiremock server.
pub fn create_test_state(mock_uri: &str) -> AppState {
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    let backend = Arc::new(HttpBackendClient::new(http, mock_uri));

    let counts_service = Arc::new(CountsService::new(backend.clone()));
    let pool_service = Arc::new(PoolService::new(backend));

    AppState::new(counts_service, pool_service)
}

/// `{ "count": n }` response body used by all three counter endpoints.
pub fn count_response(count: u64) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "count": count }))
}

/// Mounts healthy counter endpoints with the given values.
pub async fn mount_counts(server: &MockServer, pools: u64, guesses: u64, users: u64) {
    Mock::given(method("GET"))
        .and(path("/pools/count"))
        .respond_with(count_response(pools))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/guesses/count"))
        .respond_with(count_response(guesses))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/count"))
        .respond_with(count_response(users))
        .mount(server)
        .await;
}
