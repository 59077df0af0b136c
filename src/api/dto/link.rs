//! DTOs for link endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request body for `POST /api`.
///
/// Both fields are required and must be non-empty. The URL is otherwise
/// stored verbatim.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    #[validate(length(min = 1, message = "id must not be empty"))]
    pub id: String,

    #[validate(length(min = 1, message = "url must not be empty"))]
    pub url: String,
}

impl From<CreateLinkRequest> for Link {
    fn from(request: CreateLinkRequest) -> Self {
        Link::new(request.id, request.url)
    }
}

/// JSON representation of a stored link.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkResponse {
    pub id: String,
    pub url: String,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            url: link.url,
        }
    }
}
