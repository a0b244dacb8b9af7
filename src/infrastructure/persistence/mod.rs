//! Mapping repository implementations.
//!
//! - [`PgMappingRepository`] - PostgreSQL storage via SQLx
//! - [`MemoryMappingRepository`] - Non-durable in-process storage

pub mod memory_mapping_repository;
pub mod pg_mapping_repository;

pub use memory_mapping_repository::MemoryMappingRepository;
pub use pg_mapping_repository::PgMappingRepository;
