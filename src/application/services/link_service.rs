//! Link fetch and write service.

use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Narrow access point between request handling and link storage.
///
/// Adds no validation or transformation of its own: handlers never touch
/// the repository directly, which keeps storage details out of the API layer.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Retrieves a link by its identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if the identifier is stored
    /// - `Ok(None)` otherwise
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn fetch(&self, id: &str) -> Result<Option<Link>, AppError> {
        self.link_repository.find_by_id(id).await
    }

    /// Stores a new link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the identifier is already stored.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn write(&self, link: Link) -> Result<(), AppError> {
        self.link_repository.insert(link).await
    }

    /// Returns `true` if the underlying store is reachable.
    pub async fn health_check(&self) -> bool {
        self.link_repository.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use serde_json::json;

    #[tokio::test]
    async fn test_fetch_found() {
        let mut mock_link_repo = MockLinkRepository::new();

        mock_link_repo
            .expect_find_by_id()
            .withf(|id| id == "abc")
            .times(1)
            .returning(|_| Ok(Some(Link::new("abc", "https://example.com"))));

        let service = LinkService::new(Arc::new(mock_link_repo));

        let link = service.fetch("abc").await.unwrap();

        assert_eq!(link, Some(Link::new("abc", "https://example.com")));
    }

    #[tokio::test]
    async fn test_fetch_not_found() {
        let mut mock_link_repo = MockLinkRepository::new();

        mock_link_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = LinkService::new(Arc::new(mock_link_repo));

        assert!(service.fetch("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_fetch_passes_id_through_unchanged() {
        let mut mock_link_repo = MockLinkRepository::new();

        mock_link_repo
            .expect_find_by_id()
            .withf(|id| id == "  MiXeD  ")
            .times(1)
            .returning(|_| Ok(None));

        let service = LinkService::new(Arc::new(mock_link_repo));

        assert!(service.fetch("  MiXeD  ").await.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_propagates_storage_error() {
        let mut mock_link_repo = MockLinkRepository::new();

        mock_link_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let service = LinkService::new(Arc::new(mock_link_repo));

        let result = service.fetch("abc").await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_write_success() {
        let mut mock_link_repo = MockLinkRepository::new();

        mock_link_repo
            .expect_insert()
            .withf(|link| link.id == "abc" && link.url == "https://example.com")
            .times(1)
            .returning(|_| Ok(()));

        let service = LinkService::new(Arc::new(mock_link_repo));

        let result = service
            .write(Link::new("abc", "https://example.com"))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_write_duplicate() {
        let mut mock_link_repo = MockLinkRepository::new();

        mock_link_repo
            .expect_insert()
            .times(1)
            .returning(|_| Err(AppError::conflict("Identifier already exists", json!({}))));

        let service = LinkService::new(Arc::new(mock_link_repo));

        let result = service
            .write(Link::new("abc", "https://other.com"))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_health_check_delegates() {
        let mut mock_link_repo = MockLinkRepository::new();

        mock_link_repo
            .expect_health_check()
            .times(1)
            .returning(|| false);

        let service = LinkService::new(Arc::new(mock_link_repo));

        assert!(!service.health_check().await);
    }
}
