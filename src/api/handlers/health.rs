//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "shortener": {
///       "status": "ok",
///       "message": "Base URL: https://short.ly, delay: 1000ms"
///     }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let service = &state.shorten_service;

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            shortener: CheckStatus {
                status: "ok".to_string(),
                message: Some(format!(
                    "Base URL: {}, delay: {}ms",
                    service.base_url(),
                    service.delay().as_millis()
                )),
            },
        },
    })
}
