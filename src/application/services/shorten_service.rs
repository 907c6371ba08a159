//! Short link synthesis with simulated backend latency.

use std::time::Duration;

use crate::domain::entities::{ShortenRequest, ShortenResult};
use crate::domain::errors::ShortenError;
use crate::utils::code_generator::generate_short_code;
use crate::utils::url_validator::is_valid_url;

/// Base URL every short link hangs off unless configured otherwise.
pub const DEFAULT_BASE_URL: &str = "https://short.ly";

/// Simulated latency of a shortening round-trip.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// Validates requests and synthesizes short links.
///
/// Requests are independent: nothing is stored, no collision check is made,
/// and the same URL gets a fresh code every time.
#[derive(Debug, Clone)]
pub struct ShortenService {
    base_url: String,
    delay: Duration,
}

impl Default for ShortenService {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_DELAY)
    }
}

impl ShortenService {
    /// Creates a new shortening service.
    pub fn new(base_url: impl Into<String>, delay: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, delay }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Returns true iff `url` is a well-formed absolute URL.
    pub fn validate(url: &str) -> bool {
        is_valid_url(url)
    }

    /// Generates a 6-character base-36 short code.
    pub fn generate_short_code() -> String {
        generate_short_code()
    }

    /// Checks a request without waiting.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::EmptyInput`] if the URL is empty and
    /// [`ShortenError::InvalidUrl`] if it does not parse as an absolute URL.
    pub fn check(&self, request: &ShortenRequest) -> Result<(), ShortenError> {
        if request.original_url.is_empty() {
            return Err(ShortenError::EmptyInput);
        }

        if !Self::validate(&request.original_url) {
            return Err(ShortenError::InvalidUrl {
                input: request.original_url.clone(),
            });
        }

        Ok(())
    }

    /// Shortens a URL.
    ///
    /// Rejections are returned immediately. Accepted requests complete after
    /// the configured delay; dropping the returned future abandons the request.
    ///
    /// # Errors
    ///
    /// See [`Self::check`].
    pub async fn shorten(&self, request: ShortenRequest) -> Result<ShortenResult, ShortenError> {
        self.check(&request)?;

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let result = ShortenResult::new(&self.base_url, Self::generate_short_code());
        tracing::debug!(
            original_url = %request.original_url,
            short_url = %result.short_url,
            "Short link synthesized"
        );

        Ok(result)
    }
}
