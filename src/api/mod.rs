//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into shortening operations and formats
//! responses according to the API contract.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
