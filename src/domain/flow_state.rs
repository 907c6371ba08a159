//! States of the interactive shortening flow.
//!
//! ```text
//! Idle -> Submitting -> Success(result) | Failed(kind) -> Idle (next edit/submit)
//! ```
//!
//! Validation failures skip `Submitting` and land in `Failed` directly.

use serde::Serialize;

use crate::domain::entities::ShortenResult;
use crate::domain::errors::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum FlowState {
    #[default]
    Idle,
    Submitting,
    Success(ShortenResult),
    Failed(ErrorKind),
}

impl FlowState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, FlowState::Submitting)
    }
}

/// Read-only view of a flow for front-ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowSnapshot {
    pub input: String,
    pub state: FlowState,
    /// Most recent completion; survives edits until the next one replaces it.
    pub last_result: Option<ShortenResult>,
    pub copied: bool,
    pub busy: bool,
}
