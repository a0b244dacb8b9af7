//! Short link creation, resolution and click counting.

use std::sync::Arc;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::{MappingRepository, validate_code};
use crate::error::AppError;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_code_with_length, is_reserved};
use serde_json::json;
use tracing::{debug, warn};

/// Result of a shorten request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub code: String,
    pub short_url: String,
}

/// Aggregate figures over all stored mappings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageSummary {
    pub links: i64,
    pub clicks: i64,
}

/// Service composing the code generator with the mapping store.
///
/// Generic over the repository so tests can substitute mocks; the server
/// runs it as `LinkService<dyn MappingRepository>`.
pub struct LinkService<R: MappingRepository + ?Sized> {
    repository: Arc<R>,
    base_url: String,
    code_length: usize,
}

impl<R: MappingRepository + ?Sized> LinkService<R> {
    /// Creates a new link service producing codes of the default length.
    pub fn new(repository: Arc<R>, base_url: impl Into<String>) -> Self {
        Self {
            repository,
            base_url: base_url.into(),
            code_length: DEFAULT_CODE_LENGTH,
        }
    }

    /// Overrides the generated code length.
    pub fn with_code_length(mut self, code_length: usize) -> Self {
        self.code_length = code_length;
        self
    }

    /// Shortens `url` under a freshly generated code.
    ///
    /// # Collisions
    ///
    /// The store is asked exactly once. If the generated code is already
    /// taken, the existing mapping wins and the returned short URL resolves
    /// to that mapping's URL. The collision is only logged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `url` is empty.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn shorten(&self, url: String) -> Result<ShortLink, AppError> {
        if url.is_empty() {
            return Err(AppError::bad_request(
                "URL must not be empty",
                json!({ "field": "url" }),
            ));
        }

        let code = self.next_code();
        let inserted = self
            .repository
            .create(NewMapping::new(code.clone(), url))
            .await?;

        if !inserted {
            warn!(code = %code, "Generated code already existed; kept the existing mapping");
        }

        let short_url = self.short_url(&code);
        Ok(ShortLink { code, short_url })
    }

    /// Returns the original URL for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping exists.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        validate_code(code)?;

        self.repository
            .find_url(code)
            .await?
            .ok_or_else(|| not_found(code))
    }

    /// Counts one click for `code`.
    ///
    /// A missing mapping is a successful no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn record_click(&self, code: &str) -> Result<(), AppError> {
        if !self.repository.increment_clicks(code).await? {
            debug!(code = %code, "Click for unknown code ignored");
        }
        Ok(())
    }

    /// Returns the click counter for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping exists.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn clicks(&self, code: &str) -> Result<i64, AppError> {
        validate_code(code)?;

        self.repository
            .get_clicks(code)
            .await?
            .ok_or_else(|| not_found(code))
    }

    /// Returns the full mapping for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping exists.
    pub async fn details(&self, code: &str) -> Result<Mapping, AppError> {
        validate_code(code)?;

        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| not_found(code))
    }

    /// Returns link and click totals.
    pub async fn summary(&self) -> Result<StorageSummary, AppError> {
        Ok(StorageSummary {
            links: self.repository.count().await?,
            clicks: self.repository.total_clicks().await?,
        })
    }

    /// Checks storage reachability.
    pub async fn health(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    /// Joins the configured base URL and `code` with a single slash.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }

    /// Draws codes until one does not shadow a route.
    fn next_code(&self) -> String {
        loop {
            let code = generate_code_with_length(self.code_length);
            if !is_reserved(&code) {
                return code;
            }
        }
    }
}

fn not_found(code: &str) -> AppError {
    AppError::not_found("Short link not found", json!({ "code": code }))
}
