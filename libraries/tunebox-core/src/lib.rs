//! Tunebox Core
//!
//! Platform-agnostic domain types, traits, and error handling shared by the
//! catalog server, the HTTP client and the playback controller.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `SongRecord` (wire format), `Track`, `Catalog`
//! - **Core Traits**: `CatalogSource`
//! - **Error Handling**: Unified `TuneboxError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use tunebox_core::{Catalog, SongRecord};
//!
//! let records = vec![SongRecord::new(
//!     1,
//!     "Song One",
//!     "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-1.mp3",
//!     None,
//! )];
//!
//! let catalog = Catalog::from_records(records);
//! assert_eq!(catalog.len(), 1);
//! assert_eq!(catalog.get(0).unwrap().cover_url, "default-cover.jpg");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use catalog::Catalog;
pub use error::{Result, TuneboxError};
pub use traits::CatalogSource;
pub use types::{SongRecord, Track, DEFAULT_COVER_URL};
