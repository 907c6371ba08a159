//! Validation failures of a shortening request.

use serde::Serialize;

/// Why a shortening request was rejected.
///
/// Both variants are recoverable: the user edits the input and submits again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortenError {
    #[error("Please enter a URL to shorten")]
    EmptyInput,

    #[error("Please enter a valid URL (including http:// or https://)")]
    InvalidUrl { input: String },
}

/// Payload-free discriminant of [`ShortenError`], kept in flow state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    EmptyInput,
    InvalidUrl,
}

impl ShortenError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShortenError::EmptyInput => ErrorKind::EmptyInput,
            ShortenError::InvalidUrl { .. } => ErrorKind::InvalidUrl,
        }
    }
}

impl ErrorKind {
    /// Stable machine-readable code used in API error bodies.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::EmptyInput => "empty_input",
            ErrorKind::InvalidUrl => "invalid_url",
        }
    }
}
