//! Error types for amki-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while decoding a generated flashcard response.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("empty response")]
    EmptyResponse,

    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
