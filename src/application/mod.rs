//! Application layer services.
//!
//! Services consume repository traits and provide the API used by HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Link fetch and write

pub mod services;
