mod common;

use async_trait::async_trait;
use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use link_shortener::api::handlers::health_handler;
use link_shortener::domain::repositories::LinkStore;
use link_shortener::error::AppError;
use link_shortener::state::AppState;
use std::sync::Arc;

/// Store whose every call fails, as if the backend were down.
struct DownStore;

#[async_trait]
impl LinkStore for DownStore {
    async fn get(&self, _code: &str) -> Result<Option<String>, AppError> {
        Err(AppError::store_unavailable("down"))
    }

    async fn exists_by_code(&self, _code: &str) -> Result<bool, AppError> {
        Err(AppError::store_unavailable("down"))
    }

    async fn find_code_by_url(&self, _long_url: &str) -> Result<Option<String>, AppError> {
        Err(AppError::store_unavailable("down"))
    }

    async fn insert_if_absent(&self, _code: &str, _long_url: &str) -> Result<bool, AppError> {
        Err(AppError::store_unavailable("down"))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

fn down_server() -> TestServer {
    let state = AppState::new(Arc::new(DownStore), 6, 5, common::BASE_URL).unwrap();
    TestServer::new(link_shortener::routes::router(state)).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["store"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_store_down() {
    let server = down_server();

    let response = server.get("/health").expect_failure().await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["store"]["status"], "error");
}

#[tokio::test]
async fn test_store_failure_hides_backend_message() {
    let server = down_server();

    let response = server
        .post("/api/shorten")
        .json(&serde_json::json!({ "long_url": "https://example.com" }))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "store_unavailable");
    assert_eq!(json["error"]["message"], "Store unavailable");
}
