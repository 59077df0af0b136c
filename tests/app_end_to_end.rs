mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use littlelink::routes::app_router;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn send(
    state: littlelink::AppState,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app_router(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, bytes.to_vec())
}

#[tokio::test]
async fn test_create_then_fetch_round_trip() {
    let state = common::create_test_state(common::memory_pool().await);
    let payload = json!({ "id": "abc", "url": "https://example.com" });

    let (status, _) = send(state.clone(), "POST", "/api/", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(state.clone(), "GET", "/api/abc", None).await;
    assert_eq!(status, StatusCode::OK);
    let fetched: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(fetched, payload);

    let (status, _) = send(state.clone(), "GET", "/api/xyz", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(state, "POST", "/api/", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_post_without_trailing_slash() {
    let state = common::create_test_state(common::memory_pool().await);

    let (status, _) = send(
        state.clone(),
        "POST",
        "/api",
        Some(json!({ "id": "plain", "url": "https://example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(state, "GET", "/api/plain/", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_health_route_is_mounted() {
    let state = common::create_test_state(common::memory_pool().await);

    let (status, body) = send(state, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_no_update_or_delete_routes() {
    let pool = common::memory_pool().await;
    common::create_test_link(&pool, "abc", "https://example.com").await;
    let state = common::create_test_state(pool.clone());

    let (status, _) = send(state.clone(), "DELETE", "/api/abc", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _) = send(
        state,
        "PUT",
        "/api/abc",
        Some(json!({ "id": "abc", "url": "https://example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    assert_eq!(common::count_links(&pool).await, 1);
}
