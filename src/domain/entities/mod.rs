//! Core domain entities.
//!
//! The service has a single entity, [`Link`], a plain value with no behavior.

pub mod link;

pub use link::Link;
