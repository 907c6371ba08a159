//! Utility functions for code generation and URL validation.
//!
//! - [`code_generator`] - Random base-36 short codes
//! - [`url_validator`] - Absolute URL validation

pub mod code_generator;
pub mod url_validator;
