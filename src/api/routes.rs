//! API route configuration.

use crate::api::handlers::{create_link_handler, fetch_link_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Link routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /`      - Store an identifier/URL pair
/// - `GET  /{id}`  - Fetch the stored pair
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_link_handler))
        .route("/{id}", get(fetch_link_handler))
}
