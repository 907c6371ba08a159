//! Shortening request and result entities.

use serde::{Deserialize, Serialize};

/// A candidate URL submitted for shortening.
///
/// The URL is kept exactly as typed; validation happens in
/// [`crate::application::services::ShortenService`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    pub original_url: String,
}

impl ShortenRequest {
    /// Creates a new request.
    pub fn new(original_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
        }
    }
}

/// A synthesized short link.
///
/// Lives only in the result slot of the current session and is replaced by the
/// next completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResult {
    pub short_code: String,
    pub short_url: String,
}

impl ShortenResult {
    /// Builds a result from a short code and the base URL it hangs off.
    ///
    /// Trailing slashes on `base_url` are ignored so `https://short.ly/` and
    /// `https://short.ly` produce the same link.
    pub fn new(base_url: &str, short_code: impl Into<String>) -> Self {
        let short_code = short_code.into();
        let short_url = format!("{}/{}", base_url.trim_end_matches('/'), short_code);

        Self {
            short_code,
            short_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_joins_base_and_code() {
        let result = ShortenResult::new("https://short.ly", "abc123");
        assert_eq!(result.short_code, "abc123");
        assert_eq!(result.short_url, "https://short.ly/abc123");
    }

    #[test]
    fn test_result_ignores_trailing_slash() {
        let result = ShortenResult::new("https://short.ly/", "abc123");
        assert_eq!(result.short_url, "https://short.ly/abc123");
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(ShortenResult::new("https://short.ly", "zz9x01")).unwrap();
        assert_eq!(value["shortCode"], "zz9x01");
        assert_eq!(value["shortUrl"], "https://short.ly/zz9x01");

        let request: ShortenRequest =
            serde_json::from_str(r#"{"originalUrl":"https://example.com"}"#).unwrap();
        assert_eq!(request.original_url, "https://example.com");
    }
}
