//! Error types for playback management

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Transport command issued while the catalog is loading or empty
    #[error("Player not ready: {0}")]
    NotReady(&'static str),

    /// The catalog has already been fetched for this session
    #[error("Catalog already loaded")]
    AlreadyLoaded,

    /// Volume outside the representable range
    #[error("Invalid volume: {0}")]
    InvalidVolume(f32),

    /// Native audio backend error
    #[error("Audio backend error: {0}")]
    Backend(String),

    /// Settings store error
    #[error("Settings store error: {0}")]
    Store(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
