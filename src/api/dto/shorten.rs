//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{ShortenRequest, ShortenResult};

/// Maximum accepted length of an original URL, in characters.
pub const MAX_URL_LENGTH: u64 = 2048;

/// Request body of `POST /shorten`.
///
/// A missing `originalUrl` deserializes to an empty string and is reported as
/// empty input rather than a malformed body.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenBody {
    #[serde(default)]
    #[validate(length(max = MAX_URL_LENGTH, message = "URL is too long"))]
    pub original_url: String,
}

impl From<ShortenBody> for ShortenRequest {
    fn from(body: ShortenBody) -> Self {
        ShortenRequest::new(body.original_url)
    }
}

/// Response body of `POST /shorten`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_code: String,
    pub short_url: String,
}

impl From<ShortenResult> for ShortenResponse {
    fn from(result: ShortenResult) -> Self {
        Self {
            short_code: result.short_code,
            short_url: result.short_url,
        }
    }
}
