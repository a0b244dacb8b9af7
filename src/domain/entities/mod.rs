//! Core domain entities.
//!
//! - [`Mapping`] - A short code with its original URL and click counter
//! - [`NewMapping`] - Input for creating a mapping

pub mod mapping;

pub use mapping::{Mapping, NewMapping};
