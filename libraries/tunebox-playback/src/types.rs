//! Core types for playback management

use serde::{Deserialize, Serialize};

/// Player state
///
/// `Loading` until the catalog fetch settles, then `Empty` (terminal) or
/// `Ready` for the rest of the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerState {
    /// Catalog fetch in flight
    Loading,

    /// No tracks available (empty catalog or failed fetch)
    Empty,

    /// At least one track; transport is live
    Ready(Transport),
}

impl PlayerState {
    /// Short name for logs and errors
    pub fn name(&self) -> &'static str {
        match self {
            PlayerState::Loading => "loading",
            PlayerState::Empty => "empty",
            PlayerState::Ready(transport) if transport.playing => "playing",
            PlayerState::Ready(_) => "paused",
        }
    }

    /// Transport, if ready
    pub fn transport(&self) -> Option<&Transport> {
        match self {
            PlayerState::Ready(transport) => Some(transport),
            _ => None,
        }
    }
}

/// Transport state inside `Ready`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transport {
    /// Current track, always in `0..len`
    pub index: usize,

    /// Catalog length (never zero)
    pub len: usize,

    /// Playing or paused
    pub playing: bool,

    /// Elapsed progress, 0.0-100.0
    pub progress: f32,

    /// Last error reported by the audio backend, cleared on the next
    /// successful play or track change
    pub error: Option<String>,
}

impl Transport {
    /// Paused at the first track of a catalog of `len` tracks
    pub(crate) fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            playing: false,
            progress: 0.0,
            error: None,
        }
    }

    /// Index after `index`, wrapping to the start
    pub fn next_index(&self) -> usize {
        (self.index + 1) % self.len
    }

    /// Index before `index`, wrapping to the end
    pub fn previous_index(&self) -> usize {
        (self.index + self.len - 1) % self.len
    }
}

/// Input to the player state machine
///
/// User commands and native playback callbacks share one event type so
/// every mutation goes through the same transition function.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Catalog fetch resolved with `len` tracks
    CatalogLoaded { len: usize },

    /// Catalog fetch failed
    CatalogFailed,

    /// Start playback
    Play,

    /// Pause playback
    Pause,

    /// Play if paused, pause if playing
    TogglePlayback,

    /// Skip to the next track (wraps)
    Next,

    /// Skip to the previous track (wraps)
    Previous,

    /// Native element reached the end of the current track
    TrackEnded,

    /// Native position report, both values in seconds
    TimeUpdate { position: f64, duration: f64 },

    /// Change volume (0.0-1.0)
    SetVolume(f32),

    /// Flip the mute flag
    ToggleMute,

    /// Native element reported a playback failure
    PlaybackFailed { message: String },
}

/// Imperative command for the native audio primitive
#[derive(Debug, Clone, PartialEq)]
pub enum AudioCommand {
    /// Point the element at the track with this catalog index
    Load { index: usize },

    /// Start playback
    Play,

    /// Pause playback
    Pause,

    /// Reset position to zero
    SeekToStart,

    /// Apply volume level
    SetVolume(f32),

    /// Apply mute flag
    SetMuted(bool),
}
