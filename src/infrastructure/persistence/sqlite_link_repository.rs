//! SQLite implementation of link repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Row shape of the `Links` table.
#[derive(sqlx::FromRow)]
struct LinkRow {
    #[sqlx(rename = "Id")]
    id: String,
    #[sqlx(rename = "Url")]
    url: Option<String>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(row.id, row.url.unwrap_or_default())
    }
}

/// SQLite repository for link storage and retrieval.
///
/// Every operation is a single parameterized statement; the `Id` primary key
/// is the only guard against two concurrent writes of the same identifier.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// Returns the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        self.pool.as_ref()
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn init_schema(&self) -> Result<(), AppError> {
        sqlx::query("CREATE TABLE IF NOT EXISTS Links (Id TEXT PRIMARY KEY, Url TEXT)")
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to initialise Links table");
                AppError::from(e)
            })?;

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>("SELECT Id, Url FROM Links WHERE Id = ?")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, id, "Failed to fetch link");
                AppError::from(e)
            })?;

        Ok(row.map(Link::from))
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        let rows = sqlx::query_as::<_, LinkRow>("SELECT Id, Url FROM Links ORDER BY rowid")
            .fetch_all(self.pool.as_ref())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to list links");
                AppError::from(e)
            })?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn insert(&self, link: Link) -> Result<(), AppError> {
        sqlx::query("INSERT INTO Links (Id, Url) VALUES (?, ?)")
            .bind(&link.id)
            .bind(&link.url)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, id = %link.id, "Failed to insert link");
                AppError::from(e)
            })?;

        tracing::debug!(id = %link.id, "Link stored");
        Ok(())
    }

    async fn health_check(&self) -> bool {
        match sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await
        {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Database health check failed");
                false
            }
        }
    }
}
