//! Tunebox Catalog Client
//!
//! HTTP client for the Tunebox catalog server. The player uses it as its
//! [`CatalogSource`](tunebox_core::CatalogSource): one `GET /api/songs` per
//! session.
//!
//! # Example
//!
//! ```ignore
//! use tunebox_client::{CatalogClient, ClientConfig};
//! use tunebox_playback::{MemoryStore, NullBackend, PlaybackController};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CatalogClient::new(ClientConfig::new("http://localhost:5000"))?;
//!
//!     let mut player = PlaybackController::new(NullBackend, MemoryStore::new());
//!     player.load(&client).await?;
//!     println!("{}", player.view());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

// Re-export main types
pub use client::CatalogClient;
pub use error::{ClientError, Result};
pub use types::{ClientConfig, HealthResponse, DEFAULT_SERVER_URL};
