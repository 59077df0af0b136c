//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, schema setup and the Axum server lifecycle.

use crate::config::Config;
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::persistence::{PoolSettings, SqliteLinkRepository, connect};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool (database file created if missing)
/// - `Links` table (created if absent)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Schema creation fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect(&config.database_url, &PoolSettings::from(&config))
        .await
        .with_context(|| format!("Failed to open database {}", config.database_url))?;
    tracing::info!("Connected to database");

    let link_repository = Arc::new(SqliteLinkRepository::new(Arc::new(pool)));
    link_repository
        .init_schema()
        .await
        .context("Failed to initialise database schema")?;
    tracing::info!("Database schema ready");

    let state = AppState::new(link_repository.clone());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    link_repository.pool().close().await;
    tracing::info!("Server stopped");

    Ok(())
}

/// Completes on Ctrl-C, or on SIGTERM where available.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
