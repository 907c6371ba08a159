//! API route configuration.

use crate::api::handlers::{health_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public API routes.
///
/// # Endpoints
///
/// - `POST /shorten` - Shorten a single URL
/// - `GET  /health`  - Service health
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
}
