//! Error types for questlog-core

use thiserror::Error;

/// Main error type for the questlog-core library
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed input: a record missing a field its kind requires,
    /// a negative count, or a zero truncation length
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Activity kind outside the known set
    #[error("unsupported activity type: {0}")]
    UnsupportedActivityType(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Shorthand for building an [`Error::InvalidInput`]
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidInput(message.into())
    }
}

/// Result type alias for questlog-core
pub type Result<T> = std::result::Result<T, Error>;
