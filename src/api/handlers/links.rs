//! Handlers for link endpoints (fetch, create).

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::link::{CreateLinkRequest, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the stored link for an identifier.
///
/// # Endpoint
///
/// `GET /api/{id}`
///
/// The URL is returned as data; no redirect is issued.
///
/// # Response
///
/// ```json
/// { "id": "abc", "url": "https://example.com" }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the identifier is not stored.
/// Returns 500 Internal Server Error if the store cannot be read.
pub async fn fetch_link_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state
        .link_service
        .fetch(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Link not found", json!({ "id": id })))?;

    Ok(Json(link.into()))
}

/// Stores a new identifier/URL pair.
///
/// # Endpoint
///
/// `POST /api`
///
/// # Request Body
///
/// ```json
/// { "id": "abc", "url": "https://example.com" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if:
/// - The body is not a JSON object with string `id` and `url`
/// - `id` or `url` is empty
/// - The identifier is already stored
///
/// Returns 500 Internal Server Error on other storage failures.
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let id = payload.id.clone();
    state.link_service.write(payload.into()).await?;

    tracing::info!(id = %id, "Link created");
    Ok(StatusCode::CREATED)
}
