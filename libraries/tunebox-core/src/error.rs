/// Core error types for Tunebox
use thiserror::Error;

/// Result type alias using `TuneboxError`
pub type Result<T> = std::result::Result<T, TuneboxError>;

/// Core error type for Tunebox
#[derive(Error, Debug)]
pub enum TuneboxError {
    /// Catalog could not be reached
    #[error("Network error: {0}")]
    Network(String),

    /// Catalog payload could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl TuneboxError {
    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
