//! Domain layer containing the business entity and storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository traits are implemented in [`crate::infrastructure`].

pub mod entities;
pub mod repositories;
