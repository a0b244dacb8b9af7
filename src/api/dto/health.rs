//! Health check payload.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub checks: HealthChecks,
}

impl HealthResponse {
    /// Summarizes the storage probe; the service is `degraded` when it failed.
    pub fn from_storage(storage: StorageCheck) -> Self {
        Self {
            status: if storage.is_ok() { "healthy" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            checks: HealthChecks { storage },
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.checks.storage.is_ok()
    }
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub storage: StorageCheck,
}

/// Outcome of pinging the mapping store.
#[derive(Debug, Serialize)]
pub struct StorageCheck {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StorageCheck {
    pub fn connected() -> Self {
        Self {
            status: "ok",
            message: Some("Connected".to_string()),
        }
    }

    pub fn failed(reason: impl std::fmt::Display) -> Self {
        Self {
            status: "error",
            message: Some(format!("Storage error: {}", reason)),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
