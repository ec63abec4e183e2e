//! Player Events
//!
//! Event-based communication for UI synchronization. Events are queued by
//! the state machine and drained by the UI:
//! - State changes (loading/empty/paused/playing)
//! - Track changes (skip, auto-advance)
//! - Progress updates (on native time reports)
//! - Volume and mute changes
//! - Backend errors

use crate::types::PlayerState;
use serde::{Deserialize, Serialize};

/// Events emitted by the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Player state changed
    StateChanged {
        /// The new state
        state: PlayerStateEvent,
    },

    /// Current track changed
    TrackChanged {
        /// Index of the new (current) track
        index: usize,
        /// Index of the previous track
        previous: usize,
    },

    /// Progress recomputed from a native time report
    ProgressChanged {
        /// Elapsed progress, 0.0-100.0
        percent: f32,
    },

    /// Volume or mute changed
    VolumeChanged {
        /// New volume level (0.0-1.0)
        level: f32,
        /// Whether audio is muted
        muted: bool,
    },

    /// Audio backend reported an error
    Error {
        /// Error message
        message: String,
    },
}

/// Player state for events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerStateEvent {
    /// Fetching the catalog
    Loading,
    /// No tracks available
    Empty,
    /// Track selected, not playing
    Paused,
    /// Playing audio
    Playing,
}

impl From<&PlayerState> for PlayerStateEvent {
    fn from(state: &PlayerState) -> Self {
        match state {
            PlayerState::Loading => PlayerStateEvent::Loading,
            PlayerState::Empty => PlayerStateEvent::Empty,
            PlayerState::Ready(transport) if transport.playing => PlayerStateEvent::Playing,
            PlayerState::Ready(_) => PlayerStateEvent::Paused,
        }
    }
}
