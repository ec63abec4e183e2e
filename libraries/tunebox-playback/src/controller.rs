//! Playback controller - session orchestration
//!
//! Owns the catalog, the state machine, the audio backend and the settings
//! store. Every public method feeds one [`Event`] to the [`PlayerModel`] and
//! executes the returned commands against the backend.

use crate::{
    backend::AudioBackend,
    error::{PlaybackError, Result},
    events::PlayerEvent,
    model::PlayerModel,
    store::{SettingsStore, SETTING_VOLUME},
    types::{AudioCommand, Event, PlayerState},
    view::PlayerView,
    volume::Volume,
};
use tunebox_core::{Catalog, CatalogSource, Track};

/// Playback controller for one player session
pub struct PlaybackController<B: AudioBackend, S: SettingsStore> {
    model: PlayerModel,
    catalog: Catalog,
    backend: B,
    store: S,
}

impl<B: AudioBackend, S: SettingsStore> PlaybackController<B, S> {
    /// Create a controller in `Loading`, restoring the stored volume
    pub fn new(backend: B, store: S) -> Self {
        let volume = Volume::from_stored(store.get(SETTING_VOLUME).as_deref());
        tracing::debug!(volume = volume.level(), "Restored volume");

        Self {
            model: PlayerModel::new(volume),
            catalog: Catalog::empty(),
            backend,
            store,
        }
    }

    // ===== Catalog =====

    /// Fetch the catalog and leave `Loading`
    ///
    /// Runs once per session. A fetch failure is logged and treated like an
    /// empty catalog; it is not returned to the caller.
    pub async fn load<C>(&mut self, source: &C) -> Result<()>
    where
        C: CatalogSource + ?Sized,
    {
        if *self.model.state() != PlayerState::Loading {
            return Err(PlaybackError::AlreadyLoaded);
        }

        let event = match source.fetch_catalog().await {
            Ok(catalog) => {
                tracing::info!(tracks = catalog.len(), "Catalog loaded");
                let len = catalog.len();
                self.catalog = catalog;
                Event::CatalogLoaded { len }
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching tracks");
                Event::CatalogFailed
            }
        };

        self.dispatch(event);
        Ok(())
    }

    // ===== Playback Control =====

    /// Start or resume playback
    pub fn play(&mut self) -> Result<()> {
        self.command(Event::Play)
    }

    /// Pause playback
    pub fn pause(&mut self) -> Result<()> {
        self.command(Event::Pause)
    }

    /// Play if paused, pause if playing
    pub fn toggle_playback(&mut self) -> Result<()> {
        self.command(Event::TogglePlayback)
    }

    /// Skip to next track, wrapping to the first
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<()> {
        self.command(Event::Next)
    }

    /// Go to previous track, wrapping to the last
    pub fn previous(&mut self) -> Result<()> {
        self.command(Event::Previous)
    }

    // ===== Volume =====

    /// Set volume (0.0-1.0) and persist it
    ///
    /// Out-of-range values are clamped; zero mutes.
    pub fn set_volume(&mut self, level: f32) -> Result<()> {
        if !level.is_finite() {
            return Err(PlaybackError::InvalidVolume(level));
        }

        self.command(Event::SetVolume(level))?;
        self.persist_volume();
        Ok(())
    }

    /// Toggle mute state, keeping the volume level
    pub fn toggle_mute(&mut self) -> Result<()> {
        self.command(Event::ToggleMute)
    }

    // ===== Native callbacks =====

    /// The element finished the current track
    pub fn on_track_ended(&mut self) {
        self.dispatch(Event::TrackEnded);
    }

    /// The element reported its position (seconds)
    pub fn on_time_update(&mut self, position: f64, duration: f64) {
        self.dispatch(Event::TimeUpdate { position, duration });
    }

    /// The element reported a playback failure
    pub fn on_playback_error(&mut self, message: impl Into<String>) {
        self.dispatch(Event::PlaybackFailed {
            message: message.into(),
        });
    }

    // ===== State Queries =====

    /// Current state
    pub fn state(&self) -> &PlayerState {
        self.model.state()
    }

    /// Loaded catalog (empty until `load` succeeds)
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Index of the current track
    pub fn current_index(&self) -> Option<usize> {
        self.model.state().transport().map(|t| t.index)
    }

    /// Current track
    pub fn current_track(&self) -> Option<&Track> {
        self.current_index()
            .and_then(|index| self.catalog.get(index))
    }

    /// Whether a track is playing
    pub fn is_playing(&self) -> bool {
        self.model.is_playing()
    }

    /// Elapsed progress of the current track (0.0-100.0)
    pub fn progress(&self) -> f32 {
        self.model
            .state()
            .transport()
            .map_or(0.0, |t| t.progress)
    }

    /// Current volume level (0.0-1.0)
    pub fn volume(&self) -> f32 {
        self.model.volume().level()
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.model.volume().is_muted()
    }

    /// Renderable snapshot for the UI
    pub fn view(&self) -> PlayerView<'_> {
        PlayerView::render(self.model.state(), &self.catalog, self.model.volume())
    }

    /// Drain all pending events
    ///
    /// The UI should call this after each interaction or callback to
    /// synchronize with the player.
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        self.model.drain_events()
    }

    /// Audio backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Settings store
    pub fn store(&self) -> &S {
        &self.store
    }

    // ===== Internals =====

    fn command(&mut self, event: Event) -> Result<()> {
        if self.model.state().transport().is_none() {
            return Err(PlaybackError::NotReady(self.model.state().name()));
        }

        self.dispatch(event);
        Ok(())
    }

    fn dispatch(&mut self, event: Event) {
        for command in self.model.apply(event) {
            self.execute(command);
        }
    }

    fn execute(&mut self, command: AudioCommand) {
        match command {
            AudioCommand::Load { index } => match self.catalog.get(index) {
                Some(track) => {
                    tracing::debug!(index, title = %track.title, "Loading track");
                    self.backend.load(&track.source_url);
                }
                None => tracing::warn!(index, "Load requested for a track outside the catalog"),
            },
            AudioCommand::Play => {
                if let Err(e) = self.backend.play() {
                    tracing::warn!(error = %e, "Audio backend failed to play");
                    self.dispatch(Event::PlaybackFailed {
                        message: e.to_string(),
                    });
                }
            }
            AudioCommand::Pause => self.backend.pause(),
            AudioCommand::SeekToStart => self.backend.seek_to_start(),
            AudioCommand::SetVolume(level) => self.backend.set_volume(level),
            AudioCommand::SetMuted(muted) => self.backend.set_muted(muted),
        }
    }

    fn persist_volume(&mut self) {
        let stored = self.model.volume().to_stored();
        if let Err(e) = self.store.set(SETTING_VOLUME, &stored) {
            tracing::warn!(error = %e, "Failed to persist volume");
        }
    }
}

impl<B: AudioBackend, S: SettingsStore> Drop for PlaybackController<B, S> {
    fn drop(&mut self) {
        self.backend.release();
    }
}
