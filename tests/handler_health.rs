mod common;

use axum::http::StatusCode;
use axum::{Router, routing::get};
use axum_test::TestServer;
use littlelink::api::handlers::health_handler;

#[tokio::test]
async fn test_health_endpoint_success() {
    let state = common::create_test_state(common::memory_pool().await);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["database"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_degraded_when_pool_closed() {
    let pool = common::memory_pool().await;
    let state = common::create_test_state(pool.clone());
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();
    pool.close().await;

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
}
