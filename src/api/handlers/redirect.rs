//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, error};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::is_reserved;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the original URL
/// 2. Build the `Location` header
/// 3. Count the click (failures are logged, never surfaced)
/// 4. Return 302 Found
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown or names another route.
/// Returns 500 Internal Server Error if the stored URL is not a valid header
/// value; no click is counted in that case.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if is_reserved(&code) {
        return Err(AppError::not_found(
            "Short link not found",
            json!({ "code": code }),
        ));
    }

    let original_url = state.link_service.resolve(&code).await?;

    let location = HeaderValue::try_from(original_url.as_str()).map_err(|_| {
        AppError::internal(
            "Stored URL cannot be used as a redirect target",
            json!({ "code": code }),
        )
    })?;

    if let Err(e) = state.link_service.record_click(&code).await {
        error!(code = %code, error = %e, "Failed to increment clicks");
    }

    debug!(code = %code, target = %original_url, "Redirect");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
