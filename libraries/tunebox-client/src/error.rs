//! Error types for the Tunebox catalog client.

use thiserror::Error;
use tunebox_core::TuneboxError;

/// Errors that can occur when talking to a Tunebox server.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),
}

impl From<ClientError> for TuneboxError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::ParseError(msg) => TuneboxError::parse(msg),
            ClientError::InvalidUrl(msg) => TuneboxError::invalid_input(msg),
            other => TuneboxError::network(other.to_string()),
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
