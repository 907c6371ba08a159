//! Application layer orchestrating the shortening flow.
//!
//! # Components
//!
//! - [`services::shorten_service::ShortenService`] - Request validation and short link synthesis
//! - [`flow::ShorteningFlow`] - View-layer state machine with submit guard,
//!   cancellation, notifications and clipboard copy

pub mod flow;
pub mod services;

pub use flow::{FlowError, ShorteningFlow};
