//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server or
//! the CLI starts.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SHORT_BASE_URL` - Base of every short link (default: `https://short.ly`)
//! - `SHORTEN_DELAY_MS` - Simulated shortening latency (default: 1000, max: 60000)
//! - `COPY_FEEDBACK_MS` - How long "copied" stays on after a copy (default: 2000)
//!
//! A `.env` file is honoured when loaded via `dotenvy::dotenv()` in the binaries.

use anyhow::Result;
use std::env;
use std::time::Duration;
use url::Url;

use crate::application::flow::DEFAULT_COPY_FEEDBACK;
use crate::application::services::shorten_service::{DEFAULT_BASE_URL, DEFAULT_DELAY};

/// Upper bound for `SHORTEN_DELAY_MS`.
const MAX_SHORTEN_DELAY_MS: u64 = 60_000;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Base URL short codes are appended to.
    pub base_url: String,
    /// Simulated latency before a shortening completes, in milliseconds.
    pub shorten_delay_ms: u64,
    /// Duration of the "copied" indicator, in milliseconds.
    pub copy_feedback_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            shorten_delay_ms: DEFAULT_DELAY.as_millis() as u64,
            copy_feedback_ms: DEFAULT_COPY_FEEDBACK.as_millis() as u64,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset or unparsable numeric variables fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);
        let base_url = env::var("SHORT_BASE_URL").unwrap_or(defaults.base_url);

        let shorten_delay_ms = env::var("SHORTEN_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.shorten_delay_ms);

        let copy_feedback_ms = env::var("COPY_FEEDBACK_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.copy_feedback_ms);

        Self {
            listen_addr,
            log_level,
            log_format,
            base_url,
            shorten_delay_ms,
            copy_feedback_ms,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `base_url` is not an absolute HTTP(S) URL without query or fragment
    /// - `shorten_delay_ms` exceeds 60000
    /// - `copy_feedback_ms` is 0
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        let base = Url::parse(&self.base_url).map_err(|e| {
            anyhow::anyhow!("SHORT_BASE_URL is not a valid URL ('{}'): {}", self.base_url, e)
        })?;

        if base.scheme() != "http" && base.scheme() != "https" {
            anyhow::bail!(
                "SHORT_BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if base.query().is_some() || base.fragment().is_some() {
            anyhow::bail!(
                "SHORT_BASE_URL must not contain a query or fragment, got '{}'",
                self.base_url
            );
        }

        if self.shorten_delay_ms > MAX_SHORTEN_DELAY_MS {
            anyhow::bail!(
                "SHORTEN_DELAY_MS is too large (max: {}), got {}",
                MAX_SHORTEN_DELAY_MS,
                self.shorten_delay_ms
            );
        }

        if self.copy_feedback_ms == 0 {
            anyhow::bail!("COPY_FEEDBACK_MS must be greater than 0");
        }

        Ok(())
    }

    pub fn shorten_delay(&self) -> Duration {
        Duration::from_millis(self.shorten_delay_ms)
    }

    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Shorten delay: {}ms", self.shorten_delay_ms);
        tracing::info!("  Copy feedback: {}ms", self.copy_feedback_ms);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
