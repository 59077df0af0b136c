//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::SqliteLinkRepository;

/// Application state shared across requests.
///
/// Holds no mutable data of its own; the repository owns the pool handle.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<SqliteLinkRepository>>,
}

impl AppState {
    /// Builds state around an already-initialised repository.
    pub fn new(link_repository: Arc<SqliteLinkRepository>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(link_repository)),
        }
    }
}
