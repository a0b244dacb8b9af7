//! Mapping entity: a short code bound to its original URL and click counter.

use chrono::{DateTime, Utc};

/// A persisted short code mapping.
///
/// Once created, only `clicks` ever changes.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Mapping {
    pub code: String,
    pub original_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(code: String, original_url: String, clicks: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            code,
            original_url,
            clicks,
            created_at,
        }
    }
}

/// Input data for creating a mapping.
///
/// The URL is stored verbatim: no validation or normalization beyond non-emptiness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMapping {
    pub code: String,
    pub original_url: String,
}

impl NewMapping {
    pub fn new(code: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            original_url: original_url.into(),
        }
    }

    /// Builds the stored record with a zero click counter.
    pub fn into_mapping(self, created_at: DateTime<Utc>) -> Mapping {
        Mapping::new(self.code, self.original_url, 0, created_at)
    }
}
