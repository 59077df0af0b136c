//! Repository trait for link storage.

use crate::domain::entities::Link;
use crate::error::AppError;
use async_trait::async_trait;

/// Durable mapping from identifier to [`Link`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Ensures the backing table exists.
    ///
    /// Idempotent: safe to call on every process start, whatever the prior state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the storage engine rejects the statement.
    async fn init_schema(&self) -> Result<(), AppError>;

    /// Finds a link by its identifier.
    ///
    /// Lookups are exact-match: no case folding or trimming is applied.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: &str) -> Result<Option<Link>, AppError>;

    /// Returns every stored link in store-native order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_all(&self) -> Result<Vec<Link>, AppError>;

    /// Inserts a new link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the identifier is already stored.
    /// The existing row is left untouched.
    ///
    /// Returns [`AppError::Internal`] on any other database error.
    async fn insert(&self, link: Link) -> Result<(), AppError>;

    /// Returns `true` if the storage engine answers a trivial query.
    async fn health_check(&self) -> bool;
}
