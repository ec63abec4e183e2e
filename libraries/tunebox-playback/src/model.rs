//! Player state machine
//!
//! Pure transition logic: every user command and native callback is an
//! [`Event`], and [`PlayerModel::apply`] turns it into a new state plus the
//! [`AudioCommand`]s the native element must execute. No I/O happens here.

use crate::{
    events::{PlayerEvent, PlayerStateEvent},
    types::{AudioCommand, Event, PlayerState, Transport},
    volume::Volume,
};

/// Player state machine
#[derive(Debug, Clone)]
pub struct PlayerModel {
    state: PlayerState,
    volume: Volume,
    pending_events: Vec<PlayerEvent>,
}

impl PlayerModel {
    /// Create a model in `Loading` with the given volume
    pub fn new(volume: Volume) -> Self {
        Self {
            state: PlayerState::Loading,
            volume,
            pending_events: Vec::new(),
        }
    }

    /// Apply one event and return the commands for the audio backend
    ///
    /// Catalog events only act in `Loading`; everything else only acts in
    /// `Ready`. Events arriving in any other state are ignored.
    pub fn apply(&mut self, event: Event) -> Vec<AudioCommand> {
        match event {
            Event::CatalogLoaded { len } => self.catalog_settled(len),
            Event::CatalogFailed => self.catalog_settled(0),
            Event::Play => self.play(),
            Event::Pause => self.pause(),
            Event::TogglePlayback => {
                if self.is_playing() {
                    self.pause()
                } else {
                    self.play()
                }
            }
            Event::Next | Event::TrackEnded => self.skip(Transport::next_index),
            Event::Previous => self.skip(Transport::previous_index),
            Event::TimeUpdate { position, duration } => self.time_update(position, duration),
            Event::SetVolume(level) => self.set_volume(level),
            Event::ToggleMute => self.toggle_mute(),
            Event::PlaybackFailed { message } => self.playback_failed(message),
        }
    }

    // ===== Accessors =====

    /// Current state
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    /// Current volume
    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Whether a track is playing
    pub fn is_playing(&self) -> bool {
        self.state.transport().is_some_and(|t| t.playing)
    }

    /// Drain all pending events
    ///
    /// Returns all events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Transitions =====

    fn catalog_settled(&mut self, len: usize) -> Vec<AudioCommand> {
        if self.state != PlayerState::Loading {
            return Vec::new();
        }

        if len == 0 {
            self.state = PlayerState::Empty;
            self.emit_state_changed();
            return Vec::new();
        }

        self.state = PlayerState::Ready(Transport::new(len));
        self.emit_state_changed();

        vec![
            AudioCommand::Load { index: 0 },
            AudioCommand::SetVolume(self.volume.level()),
            AudioCommand::SetMuted(self.volume.is_muted()),
        ]
    }

    fn play(&mut self) -> Vec<AudioCommand> {
        let Some(transport) = self.transport_mut() else {
            return Vec::new();
        };
        if transport.playing {
            return Vec::new();
        }

        transport.playing = true;
        transport.error = None;
        self.emit_state_changed();
        vec![AudioCommand::Play]
    }

    fn pause(&mut self) -> Vec<AudioCommand> {
        let Some(transport) = self.transport_mut() else {
            return Vec::new();
        };
        if !transport.playing {
            return Vec::new();
        }

        transport.playing = false;
        self.emit_state_changed();
        vec![AudioCommand::Pause]
    }

    fn skip(&mut self, pick: fn(&Transport) -> usize) -> Vec<AudioCommand> {
        let Some(transport) = self.transport_mut() else {
            return Vec::new();
        };

        let previous = transport.index;
        let was_playing = transport.playing;

        transport.index = pick(transport);
        transport.playing = true;
        transport.progress = 0.0;
        transport.error = None;
        let index = transport.index;

        self.pending_events
            .push(PlayerEvent::TrackChanged { index, previous });
        if !was_playing {
            self.emit_state_changed();
        }

        vec![
            AudioCommand::Load { index },
            AudioCommand::SeekToStart,
            AudioCommand::Play,
        ]
    }

    fn time_update(&mut self, position: f64, duration: f64) -> Vec<AudioCommand> {
        let Some(transport) = self.transport_mut() else {
            return Vec::new();
        };

        if let Some(percent) = progress_percent(position, duration) {
            transport.progress = percent;
            self.pending_events
                .push(PlayerEvent::ProgressChanged { percent });
        }

        Vec::new()
    }

    fn set_volume(&mut self, level: f32) -> Vec<AudioCommand> {
        if self.transport_mut().is_none() {
            return Vec::new();
        }

        self.volume.set_level(level);
        self.emit_volume_changed();

        vec![
            AudioCommand::SetVolume(self.volume.level()),
            AudioCommand::SetMuted(self.volume.is_muted()),
        ]
    }

    fn toggle_mute(&mut self) -> Vec<AudioCommand> {
        if self.transport_mut().is_none() {
            return Vec::new();
        }

        self.volume.toggle_mute();
        self.emit_volume_changed();

        vec![AudioCommand::SetMuted(self.volume.is_muted())]
    }

    fn playback_failed(&mut self, message: String) -> Vec<AudioCommand> {
        let Some(transport) = self.transport_mut() else {
            return Vec::new();
        };

        let was_playing = transport.playing;
        transport.playing = false;
        transport.error = Some(message.clone());

        self.pending_events.push(PlayerEvent::Error { message });
        if was_playing {
            self.emit_state_changed();
        }

        Vec::new()
    }

    fn transport_mut(&mut self) -> Option<&mut Transport> {
        match &mut self.state {
            PlayerState::Ready(transport) => Some(transport),
            _ => None,
        }
    }

    fn emit_state_changed(&mut self) {
        self.pending_events.push(PlayerEvent::StateChanged {
            state: PlayerStateEvent::from(&self.state),
        });
    }

    fn emit_volume_changed(&mut self) {
        self.pending_events.push(PlayerEvent::VolumeChanged {
            level: self.volume.level(),
            muted: self.volume.is_muted(),
        });
    }
}

impl Default for PlayerModel {
    fn default() -> Self {
        Self::new(Volume::default())
    }
}

/// Elapsed percentage from a native time report
///
/// Returns `None` when either value is non-finite or the duration is not
/// positive (metadata not loaded yet, live streams).
pub fn progress_percent(position: f64, duration: f64) -> Option<f32> {
    if !position.is_finite() || !duration.is_finite() || duration <= 0.0 {
        return None;
    }

    Some((position / duration * 100.0).clamp(0.0, 100.0) as f32)
}
