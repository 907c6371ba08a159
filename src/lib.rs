//! # Shortly
//!
//! A URL shortening flow: validate a candidate URL, synthesize a random
//! six-character base-36 short code after a simulated latency, expose the short
//! link and copy it to a clipboard. Nothing is persisted and codes carry no
//! uniqueness guarantee.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, errors, flow states and port traits
//! - **Application Layer** ([`application`]) - Shortening service and the interactive flow
//! - **Infrastructure Layer** ([`infrastructure`]) - Clipboard and notifier implementations
//! - **API Layer** ([`api`]) - `POST /shorten` and `GET /health`
//!
//! Two binaries sit on top: `shortly` serves the HTTP API, `shortly-cli` drives
//! the flow from a terminal.
//!
//! ## Quick Start
//!
//! ```bash
//! export SHORT_BASE_URL="https://short.ly"   # Optional
//! cargo run
//!
//! curl -X POST localhost:3000/shorten \
//!   -H 'content-type: application/json' \
//!   -d '{"originalUrl":"https://example.com/very/long/path"}'
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortenService;
    pub use crate::application::{FlowError, ShorteningFlow};
    pub use crate::domain::entities::{Notification, NotificationKind, ShortenRequest, ShortenResult};
    pub use crate::domain::errors::{ErrorKind, ShortenError};
    pub use crate::domain::flow_state::{FlowSnapshot, FlowState};
    pub use crate::domain::ports::{Clipboard, ClipboardError, Notifier};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
