//! Tunebox - Playback Controller
//!
//! Platform-agnostic playback control for the Tunebox player.
//!
//! This crate provides:
//! - An explicit player state machine (`Loading`, `Empty`, `Ready`)
//! - Circular next/previous navigation with auto-advance on track end
//! - Progress tracking from native time reports
//! - Volume control (0.0-1.0, mute/unmute) persisted through a settings store
//! - Event queue for UI synchronization
//!
//! # Architecture
//!
//! `tunebox-playback` never touches audio samples:
//! - [`PlayerModel`] is the pure transition function (event in, commands out)
//! - [`AudioBackend`] is the native media element (play/pause/seek/volume)
//! - [`SettingsStore`] is the key-value storage holding the volume
//! - [`PlaybackController`] wires the three together
//!
//! # Example
//!
//! ```rust
//! use tunebox_core::{Catalog, Track};
//! use tunebox_playback::{MemoryStore, NullBackend, PlaybackController};
//!
//! # tokio_test_block(async {
//! let catalog: Catalog = vec![
//!     Track::new("Song One", "https://example.com/1.mp3", "cover1.jpg"),
//!     Track::new("Song Two", "https://example.com/2.mp3", "cover2.jpg"),
//! ]
//! .into();
//!
//! let mut player = PlaybackController::new(NullBackend, MemoryStore::new());
//! player.load(&catalog).await.unwrap();
//!
//! player.play().unwrap();
//! player.next().unwrap();
//! assert_eq!(player.current_track().unwrap().title, "Song Two");
//!
//! player.set_volume(0.0).unwrap();
//! assert!(player.is_muted());
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f);
//! # }
//! ```

mod backend;
mod controller;
mod error;
pub mod events;
mod model;
mod store;
pub mod types;
mod view;
mod volume;

// Public exports
pub use backend::{AudioBackend, NullBackend};
pub use controller::PlaybackController;
pub use error::{PlaybackError, Result};
pub use events::{PlayerEvent, PlayerStateEvent};
pub use model::{progress_percent, PlayerModel};
pub use store::{JsonFileStore, MemoryStore, SettingsStore, SETTING_VOLUME};
pub use types::{AudioCommand, Event, PlayerState, Transport};
pub use view::{NowPlaying, PlayerView, EMPTY_MESSAGE, LOADING_MESSAGE};
pub use volume::{Volume, DEFAULT_VOLUME};
