//! In-process implementation of the mapping repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::{MappingRepository, validate_code, validate_new_mapping};
use crate::error::AppError;

/// A repository that keeps mappings in memory.
///
/// Nothing survives a restart. Used by tests and by `STORAGE_BACKEND=memory`
/// for local development without PostgreSQL. Writes take the map's write
/// lock, so increments for one code are serialized.
pub struct MemoryMappingRepository {
    mappings: RwLock<HashMap<String, Mapping>>,
}

impl MemoryMappingRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        debug!("Using in-memory mapping storage");
        Self {
            mappings: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryMappingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MappingRepository for MemoryMappingRepository {
    async fn create(&self, new_mapping: NewMapping) -> Result<bool, AppError> {
        validate_new_mapping(&new_mapping)?;

        let mut mappings = self.mappings.write().await;
        match mappings.entry(new_mapping.code.clone()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(new_mapping.into_mapping(Utc::now()));
                Ok(true)
            }
        }
    }

    async fn find_url(&self, code: &str) -> Result<Option<String>, AppError> {
        validate_code(code)?;

        let mappings = self.mappings.read().await;
        Ok(mappings.get(code).map(|m| m.original_url.clone()))
    }

    async fn increment_clicks(&self, code: &str) -> Result<bool, AppError> {
        validate_code(code)?;

        let mut mappings = self.mappings.write().await;
        match mappings.get_mut(code) {
            Some(mapping) => {
                mapping.clicks += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn get_clicks(&self, code: &str) -> Result<Option<i64>, AppError> {
        validate_code(code)?;

        let mappings = self.mappings.read().await;
        Ok(mappings.get(code).map(|m| m.clicks))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Mapping>, AppError> {
        validate_code(code)?;

        let mappings = self.mappings.read().await;
        Ok(mappings.get(code).cloned())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.mappings.read().await.len() as i64)
    }

    async fn total_clicks(&self) -> Result<i64, AppError> {
        Ok(self.mappings.read().await.values().map(|m| m.clicks).sum())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
