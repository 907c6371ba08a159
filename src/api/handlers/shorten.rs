//! Handler for link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenBody, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for one URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "originalUrl": "https://example.com/very/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// { "shortCode": "k3x9za", "shortUrl": "https://short.ly/k3x9za" }
/// ```
///
/// The response is sent after the configured simulated delay. A client that
/// disconnects first abandons the request.
///
/// # Errors
///
/// Returns 400 Bad Request with code `empty_input`, `invalid_url` or
/// `validation_error`. Rejections are returned without waiting.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenBody>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let result = state
        .shorten_service
        .shorten(payload.into())
        .await
        .inspect_err(|err| tracing::info!(reason = %err, "Shortening request rejected"))?;

    tracing::info!(short_url = %result.short_url, "URL shortened");

    Ok(Json(result.into()))
}
