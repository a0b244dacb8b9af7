//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers and the admin
//! CLI a single entry point.
//!
//! - [`services::link_service::LinkService`] - Shortening, resolution and click counting

pub mod services;
