#![allow(dead_code)]

use littlelink::domain::repositories::LinkRepository;
use littlelink::infrastructure::persistence::{PoolSettings, SqliteLinkRepository, connect};
use littlelink::state::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Opens a fresh in-memory database with the `Links` table created.
pub async fn memory_pool() -> SqlitePool {
    let pool = connect("sqlite::memory:", &PoolSettings::default())
        .await
        .unwrap();

    SqliteLinkRepository::new(Arc::new(pool.clone()))
        .init_schema()
        .await
        .unwrap();

    pool
}

pub fn create_test_repository(pool: SqlitePool) -> SqliteLinkRepository {
    SqliteLinkRepository::new(Arc::new(pool))
}

pub async fn create_test_link(pool: &SqlitePool, id: &str, url: &str) {
    sqlx::query("INSERT INTO Links (Id, Url) VALUES (?, ?)")
        .bind(id)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_links(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM Links")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(create_test_repository(pool)))
}
