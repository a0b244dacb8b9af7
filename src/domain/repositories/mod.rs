//! Repository trait definitions for the domain layer.
//!
//! Traits define the storage contract; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod mapping_repository;

pub use mapping_repository::{MappingRepository, validate_code, validate_new_mapping};

#[cfg(test)]
pub use mapping_repository::MockMappingRepository;
