//! Repository trait for short code mappings.

use crate::domain::entities::{Mapping, NewMapping};
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::json;

/// Durable storage of `code -> (original URL, clicks)`.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryMappingRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_mapping.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Inserts a mapping unless its code is already taken.
    ///
    /// Returns `Ok(true)` when a row was inserted and `Ok(false)` when the
    /// code already existed. In the latter case the stored mapping, including
    /// its original URL, is left untouched and no conflict is signalled.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the code or URL is empty.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_mapping: NewMapping) -> Result<bool, AppError>;

    /// Returns the original URL stored for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_url(&self, code: &str) -> Result<Option<String>, AppError>;

    /// Atomically adds one to the click counter of `code`.
    ///
    /// Concurrent calls never lose updates. Returns `Ok(false)` when no
    /// mapping exists; this is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn increment_clicks(&self, code: &str) -> Result<bool, AppError>;

    /// Returns the current click counter of `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn get_clicks(&self, code: &str) -> Result<Option<i64>, AppError>;

    /// Returns the full mapping record for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Mapping>, AppError>;

    /// Counts stored mappings.
    async fn count(&self) -> Result<i64, AppError>;

    /// Sums click counters over all mappings.
    async fn total_clicks(&self) -> Result<i64, AppError>;

    /// Checks that the storage backend is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}

/// Rejects empty codes and URLs before they reach storage.
pub fn validate_new_mapping(new_mapping: &NewMapping) -> Result<(), AppError> {
    validate_code(&new_mapping.code)?;

    if new_mapping.original_url.is_empty() {
        return Err(AppError::bad_request(
            "URL must not be empty",
            json!({ "field": "url" }),
        ));
    }

    Ok(())
}

/// Rejects empty codes.
pub fn validate_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() {
        return Err(AppError::bad_request(
            "Code must not be empty",
            json!({ "field": "code" }),
        ));
    }

    Ok(())
}
