//! Domain layer containing the shortening model and its boundaries.
//!
//! Nothing here depends on HTTP, terminals or the operating system. Front-ends
//! talk to the flow through the [`ports`] traits, implemented in
//! [`crate::infrastructure`].
//!
//! # Architecture
//!
//! - [`entities`] - Requests, results and user-facing notifications
//! - [`errors`] - Validation failures of a shortening request
//! - [`flow_state`] - States of the interactive shortening flow
//! - [`ports`] - Clipboard and notification traits

pub mod entities;
pub mod errors;
pub mod flow_state;
pub mod ports;
