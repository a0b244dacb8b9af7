//! Handler for link shortening endpoint.

use axum::{Json, body::Bytes, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_url": "http://localhost:8080/aZ3k9Q" }
/// ```
///
/// # Errors
///
/// The body is parsed as JSON whatever the `Content-Type` header says.
///
/// Returns 400 Bad Request if the body is not valid JSON or `url` is missing or empty.
/// Returns 500 Internal Server Error if the mapping cannot be stored.
pub async fn shorten_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ShortenResponse>, AppError> {
    let payload: ShortenRequest = serde_json::from_slice(&body)?;
    payload.validate()?;

    let link = state.link_service.shorten(payload.url).await?;

    Ok(Json(ShortenResponse {
        short_url: link.short_url,
    }))
}
