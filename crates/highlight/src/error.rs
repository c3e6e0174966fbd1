//! Error types for the highlight crate.

use thiserror::Error;

/// Result type alias for highlight operations.
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Errors that can occur at the highlight call boundary.
///
/// Unmatched words, empty prefix lists and absent fields are not errors;
/// they degrade to pass-through text.
#[derive(Debug, Error)]
pub enum HighlightError {
    /// Input of the wrong shape (non-text field, malformed response)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error code for integration with callers that report numeric codes.
/// Range: 12xxx for highlight errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightErrorCode {
    /// Input of the wrong shape
    InvalidArgument = 12001,
    /// Configuration error
    Config = 12002,
    /// JSON parsing error
    JsonParsing = 12003,
}

impl HighlightError {
    /// Returns the error code for this error.
    pub fn code(&self) -> HighlightErrorCode {
        match self {
            HighlightError::InvalidArgument(_) => HighlightErrorCode::InvalidArgument,
            HighlightError::Config(_) => HighlightErrorCode::Config,
            HighlightError::Json(_) => HighlightErrorCode::JsonParsing,
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        HighlightError::InvalidArgument(message.into())
    }
}
