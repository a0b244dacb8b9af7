//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
///
/// The URL is stored exactly as sent; only emptiness is rejected.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(length(min = 1, message = "URL must not be empty"))]
    pub url: String,
}

/// Full short URL for the newly created mapping.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
}
