use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

use crate::domain::errors::{ErrorKind, ShortenError};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error description returned in API bodies.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    EmptyInput { message: String, details: Value },
    #[error("{message}")]
    InvalidUrl { message: String, details: Value },
    #[error("{message}")]
    Validation { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::EmptyInput { .. }
            | AppError::InvalidUrl { .. }
            | AppError::Validation { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::EmptyInput { .. } => ErrorKind::EmptyInput.code(),
            AppError::InvalidUrl { .. } => ErrorKind::InvalidUrl.code(),
            AppError::Validation { .. } => "validation_error",
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (message, details) = match self {
            AppError::EmptyInput { message, details }
            | AppError::InvalidUrl { message, details }
            | AppError::Validation { message, details } => (message.clone(), details.clone()),
        };

        ErrorInfo {
            code: self.code(),
            message,
            details,
        }
    }
}

impl From<ShortenError> for AppError {
    fn from(err: ShortenError) -> Self {
        let message = err.to_string();
        match err {
            ShortenError::EmptyInput => AppError::EmptyInput {
                message,
                details: json!({}),
            },
            ShortenError::InvalidUrl { input } => AppError::InvalidUrl {
                message,
                details: json!({ "input": input }),
            },
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let fields: serde_json::Map<String, Value> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let messages: Vec<String> = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                (field.to_string(), json!(messages))
            })
            .collect();

        AppError::bad_request("Request validation failed", Value::Object(fields))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_maps_to_bad_request() {
        let err = AppError::from(ShortenError::EmptyInput);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "empty_input");
        assert_eq!(err.to_string(), "Please enter a URL to shorten");
    }

    #[test]
    fn test_invalid_url_carries_input() {
        let err = AppError::from(ShortenError::InvalidUrl {
            input: "example.com".to_string(),
        });
        let info = err.to_error_info();
        assert_eq!(info.code, "invalid_url");
        assert_eq!(info.details["input"], "example.com");
    }

    #[test]
    fn test_every_error_is_a_client_error() {
        let errors = [
            AppError::from(ShortenError::EmptyInput),
            AppError::from(ShortenError::InvalidUrl {
                input: "htp:/bad".to_string(),
            }),
            AppError::bad_request("Request validation failed", json!({})),
        ];

        for err in errors {
            let code = err.code();
            assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST, "{code}");
        }
    }
}
