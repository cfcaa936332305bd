//! Errors raised by level generation.

use thiserror::Error;

/// Level generation error types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GexError {
    /// An input could not produce a meaningful strike ladder.
    #[error("validation error: {0}")]
    Validation(String),
}

impl GexError {
    /// Builds a validation error from any message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
