mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use bolao_web::web::handlers::create_pool_handler;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_app(state: bolao_web::AppState) -> Router {
    Router::new()
        .route("/pools", post(create_pool_handler))
        .with_state(state)
}

#[tokio::test]
async fn test_create_pool_success_shows_code_and_resets_form() {
    let mock_server = MockServer::start().await;
    common::mount_counts(&mock_server, 101, 1327, 95).await;

    Mock::given(method("POST"))
        .and(path("/pools"))
        .and(body_json(json!({ "title": "My Pool" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "code": "ABC123" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let state = common::create_test_state(&mock_server.uri());
    let server = TestServer::new(create_app(state)).unwrap();

    let response = server.post("/pools").form(&[("title", "My Pool")]).await;

    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("flash-success"));
    assert!(body.contains("Seu bolão foi criado com sucesso"));
    // The invite code is both displayed and staged as the clipboard payload.
    assert!(body.contains(r#"data-code="ABC123""#));
    assert!(body.contains("ABC123"));
    // The title input is reset on success.
    assert!(body.contains(r#"value="""#));
    assert!(!body.contains("My Pool"));
}

#[tokio::test]
async fn test_create_pool_failure_keeps_title_and_shows_error() {
    let mock_server = MockServer::start().await;
    common::mount_counts(&mock_server, 101, 1327, 95).await;

    Mock::given(method("POST"))
        .and(path("/pools"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let state = common::create_test_state(&mock_server.uri());
    let server = TestServer::new(create_app(state)).unwrap();

    let response = server.post("/pools").form(&[("title", "My Pool")]).await;

    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("flash-error"));
    assert!(body.contains("Erro ao cadastrar o bolão. Tente novamente."));
    // The visitor's input survives for retry, and no clipboard payload exists.
    assert!(body.contains(r#"value="My Pool""#));
    assert!(!body.contains("data-code"));
}

#[tokio::test]
async fn test_create_pool_forwards_empty_title_unchanged() {
    let mock_server = MockServer::start().await;
    common::mount_counts(&mock_server, 101, 1327, 95).await;

    // The upstream must receive exactly {"title": ""}; nothing rejects an
    // empty title on this side.
    Mock::given(method("POST"))
        .and(path("/pools"))
        .and(body_json(json!({ "title": "" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "code": "EMPTY1" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let state = common::create_test_state(&mock_server.uri());
    let server = TestServer::new(create_app(state)).unwrap();

    let response = server.post("/pools").form(&[("title", "")]).await;

    response.assert_status_ok();
    assert!(response.text().contains(r#"data-code="EMPTY1""#));
}

#[tokio::test]
async fn test_two_rapid_submissions_issue_two_upstream_requests() {
    let mock_server = MockServer::start().await;
    common::mount_counts(&mock_server, 101, 1327, 95).await;

    Mock::given(method("POST"))
        .and(path("/pools"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "code": "TWICE1" })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let state = common::create_test_state(&mock_server.uri());
    let server = TestServer::new(create_app(state)).unwrap();

    // No server-side lock: both submissions reach the upstream independently.
    let (first, second) = tokio::join!(
        server.post("/pools").form(&[("title", "My Pool")]),
        server.post("/pools").form(&[("title", "My Pool")]),
    );

    first.assert_status_ok();
    second.assert_status_ok();
}

#[tokio::test]
async fn test_counter_failure_after_successful_create_fails_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/pools"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "code": "ABC123" })))
        .mount(&mock_server)
        .await;

    // Counter endpoints left unmounted: the page re-render cannot load them.
    let state = common::create_test_state(&mock_server.uri());
    let server = TestServer::new(create_app(state)).unwrap();

    let response = server.post("/pools").form(&[("title", "My Pool")]).await;

    response.assert_status(axum::http::StatusCode::BAD_GATEWAY);
}
