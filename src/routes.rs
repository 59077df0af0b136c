//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`     - Health check (database)
//! - `POST /api`        - Store a link
//! - `GET  /api/{id}`   - Fetch a link
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin permitted
//! - **Path normalization** - Trailing slash handling, so `POST /api/` works

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and middleware, without path normalization.
///
/// Used directly by handler tests; servers should use [`app_router`].
pub fn base_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::link_routes())
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}

/// Constructs the application service with trailing slashes trimmed before routing.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(base_router(state))
}
