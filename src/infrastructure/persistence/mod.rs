//! SQLite repository implementations.
//!
//! Queries are built at runtime with SQLx and bound parameters, so no database
//! is needed at compile time.
//!
//! # Modules
//!
//! - [`connection`] - Pool construction and connection options
//! - [`SqliteLinkRepository`] - Link storage and retrieval

pub mod connection;
pub mod sqlite_link_repository;

pub use connection::{PoolSettings, connect};
pub use sqlite_link_repository::SqliteLinkRepository;
