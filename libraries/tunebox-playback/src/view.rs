//! Renderable player snapshot
//!
//! The UI draws exactly one of three screens: a loading notice, a
//! "no tracks" notice, or the transport for the current track.

use crate::{types::PlayerState, volume::Volume};
use serde::Serialize;
use std::fmt;
use tunebox_core::{Catalog, Track};

/// Shown while the catalog is being fetched
pub const LOADING_MESSAGE: &str = "Loading tracks...";

/// Shown for an empty catalog or a failed fetch
pub const EMPTY_MESSAGE: &str = "No tracks available.";

/// What the UI should show
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PlayerView<'a> {
    /// Catalog fetch in flight
    Loading { message: &'static str },

    /// Nothing to play
    Empty { message: &'static str },

    /// Transport for the current track
    Ready(NowPlaying<'a>),
}

/// Transport screen contents
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NowPlaying<'a> {
    pub track: &'a Track,
    pub index: usize,
    pub len: usize,
    pub playing: bool,
    pub progress: f32,
    pub volume: f32,
    pub muted: bool,
    pub error: Option<&'a str>,
}

impl<'a> PlayerView<'a> {
    /// Build the view for a state
    pub fn render(state: &'a PlayerState, catalog: &'a Catalog, volume: Volume) -> Self {
        let empty = PlayerView::Empty {
            message: EMPTY_MESSAGE,
        };

        match state {
            PlayerState::Loading => PlayerView::Loading {
                message: LOADING_MESSAGE,
            },
            PlayerState::Empty => empty,
            PlayerState::Ready(transport) => match catalog.get(transport.index) {
                Some(track) => PlayerView::Ready(NowPlaying {
                    track,
                    index: transport.index,
                    len: transport.len,
                    playing: transport.playing,
                    progress: transport.progress,
                    volume: volume.level(),
                    muted: volume.is_muted(),
                    error: transport.error.as_deref(),
                }),
                None => empty,
            },
        }
    }
}

impl fmt::Display for PlayerView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerView::Loading { message } | PlayerView::Empty { message } => {
                f.write_str(message)
            }
            PlayerView::Ready(now) => {
                let status = if now.playing { "Playing" } else { "Paused" };
                write!(
                    f,
                    "{status}: {} [{}/{}] {:.0}% | volume {:.0}%",
                    now.track.title,
                    now.index + 1,
                    now.len,
                    now.progress,
                    now.volume * 100.0
                )?;
                if now.muted {
                    f.write_str(" (muted)")?;
                }
                if let Some(error) = now.error {
                    write!(f, " | error: {error}")?;
                }
                Ok(())
            }
        }
    }
}
