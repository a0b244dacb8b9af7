//! API route configuration.

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public routes.
///
/// # Endpoints
///
/// - `POST /shorten`       - Create a short URL
/// - `GET  /stats/{code}`  - Click count for a code
/// - `GET  /health`        - Storage health check
/// - `GET  /{code}`        - Redirect to the original URL
///
/// Any other method on these paths yields 405 Method Not Allowed.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
}
