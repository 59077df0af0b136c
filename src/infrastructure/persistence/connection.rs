//! SQLite connection pool construction.

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

use crate::config::Config;

/// Pool sizing and timeout settings.
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub busy_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
            busy_timeout: Duration::from_secs(5),
        }
    }
}

impl From<&Config> for PoolSettings {
    fn from(config: &Config) -> Self {
        Self {
            max_connections: config.db_max_connections,
            acquire_timeout: Duration::from_secs(config.db_connect_timeout),
            busy_timeout: Duration::from_secs(config.db_busy_timeout),
        }
    }
}

/// Returns `true` for URLs that open a private in-memory database.
pub fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Opens a pool to the SQLite database at `database_url`.
///
/// The database file is created if it does not exist. File-backed databases
/// use WAL journaling so readers do not block the writer.
///
/// In-memory databases live only as long as their last connection, so the
/// pool is pinned to one connection that is never recycled.
///
/// # Errors
///
/// Returns an error if the URL cannot be parsed or the first connection fails.
pub async fn connect(database_url: &str, settings: &PoolSettings) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .busy_timeout(settings.busy_timeout);

    let pool_options = SqlitePoolOptions::new().acquire_timeout(settings.acquire_timeout);

    let pool = if is_in_memory(database_url) {
        pool_options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        pool_options
            .max_connections(settings.max_connections)
            .connect_with(options.journal_mode(SqliteJournalMode::Wal))
            .await?
    };

    tracing::debug!(
        in_memory = is_in_memory(database_url),
        "SQLite pool opened"
    );

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_in_memory() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://file:links?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://Links.sqlite"));
    }

    #[tokio::test]
    async fn test_connect_in_memory() {
        let pool = connect("sqlite::memory:", &PoolSettings::default())
            .await
            .unwrap();

        let one: i64 = sqlx::query_scalar("SELECT 1").fetch_one(&pool).await.unwrap();
        assert_eq!(one, 1);
    }

    #[tokio::test]
    async fn test_connect_fails_for_missing_directory() {
        let result = connect(
            "sqlite:///nonexistent-littlelink-dir/nested/links.sqlite",
            &PoolSettings::default(),
        )
        .await;
        assert!(result.is_err());
    }
}
