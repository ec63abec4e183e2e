//! Types for Tunebox API requests and responses.

use serde::Deserialize;

/// Server address used when nothing else is configured.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

/// Configuration for connecting to a Tunebox server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the server (e.g., "http://localhost:5000")
    pub url: String,
}

impl ClientConfig {
    /// Create a new config for the given base URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}

/// Response from `GET /api/health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Number of songs the server is serving
    #[serde(default)]
    pub songs: usize,
}
