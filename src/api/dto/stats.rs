//! DTOs for the stats endpoint.

use serde::Serialize;

/// Click count for a short code.
///
/// `short_url` carries the code itself, not the full URL.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub short_url: String,
    pub clicks: i64,
}
