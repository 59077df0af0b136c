//! # LittleLink
//!
//! A small URL shortening service built with Axum and SQLite. Clients submit
//! an identifier together with a URL; later requests for that identifier
//! return the stored URL as JSON. Identifiers are chosen by the caller.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The [`Link`](domain::entities::Link) entity and repository trait
//! - **Application Layer** ([`application`]) - The link service handlers call into
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite storage
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export DB_PATH="Links.sqlite"   # Optional
//! cargo run
//!
//! curl -X POST localhost:3000/api/ -H 'content-type: application/json' \
//!      -d '{"id":"abc","url":"https://example.com"}'
//! curl localhost:3000/api/abc
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::Link;
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::SqliteLinkRepository;
    pub use crate::state::AppState;
}
