//! Utility helpers shared across layers.
//!
//! - [`db_error`] - SQLite error classification

pub mod db_error;
