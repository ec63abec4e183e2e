//! Integration tests for the playback controller
//!
//! Drive the controller the way a UI does: load the catalog, issue
//! transport commands, feed native callbacks, and check both the player
//! state and the exact commands the audio backend received.

use async_trait::async_trait;
use std::cell::Cell;
use std::rc::Rc;
use tunebox_core::{Catalog, CatalogSource, SongRecord, Track, TuneboxError};
use tunebox_playback::{
    AudioBackend, MemoryStore, PlaybackController, PlaybackError, PlayerEvent, PlayerState,
    PlayerStateEvent, PlayerView, SettingsStore, EMPTY_MESSAGE, SETTING_VOLUME,
};

// ===== Test Helpers =====

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Load(String),
    Play,
    Pause,
    SeekToStart,
    SetVolume(f32),
    SetMuted(bool),
}

/// Backend that records every command
#[derive(Default)]
struct RecordingBackend {
    calls: Vec<Call>,
    fail_play: Option<String>,
    released: Rc<Cell<bool>>,
}

impl RecordingBackend {
    fn failing(message: &str) -> Self {
        Self {
            fail_play: Some(message.to_string()),
            ..Default::default()
        }
    }
}

impl AudioBackend for RecordingBackend {
    fn load(&mut self, source_url: &str) {
        self.calls.push(Call::Load(source_url.to_string()));
    }

    fn play(&mut self) -> tunebox_playback::Result<()> {
        self.calls.push(Call::Play);
        match &self.fail_play {
            Some(message) => Err(PlaybackError::Backend(message.clone())),
            None => Ok(()),
        }
    }

    fn pause(&mut self) {
        self.calls.push(Call::Pause);
    }

    fn seek_to_start(&mut self) {
        self.calls.push(Call::SeekToStart);
    }

    fn set_volume(&mut self, level: f32) {
        self.calls.push(Call::SetVolume(level));
    }

    fn set_muted(&mut self, muted: bool) {
        self.calls.push(Call::SetMuted(muted));
    }

    fn release(&mut self) {
        self.released.set(true);
    }
}

/// Source whose fetch always fails
struct FailingSource;

#[async_trait]
impl CatalogSource for FailingSource {
    async fn fetch_catalog(&self) -> tunebox_core::Result<Catalog> {
        Err(TuneboxError::network("connection refused"))
    }
}

/// Store whose writes always fail
#[derive(Default)]
struct ReadOnlyStore;

impl SettingsStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Option<String> {
        Some("0.3".to_string())
    }

    fn set(&mut self, _key: &str, _value: &str) -> tunebox_playback::Result<()> {
        Err(PlaybackError::Store("read-only".to_string()))
    }
}

fn four_songs() -> Catalog {
    Catalog::from_records(
        (1..=4)
            .map(|i| {
                SongRecord::new(
                    i,
                    format!("Song {i}"),
                    format!("https://example.com/{i}.mp3"),
                    Some(format!("https://example.com/{i}.jpg")),
                )
            })
            .collect(),
    )
}

type Player = PlaybackController<RecordingBackend, MemoryStore>;

async fn ready_player(catalog: &Catalog) -> Player {
    let mut player = PlaybackController::new(RecordingBackend::default(), MemoryStore::new());
    player.load(catalog).await.unwrap();
    player
}

fn calls(player: &Player) -> &[Call] {
    &player.backend().calls
}

// ===== Loading =====

#[tokio::test]
async fn single_track_catalog_reaches_ready_paused() {
    let catalog: Catalog = vec![Track::new("Song One", "one.mp3", "one.jpg")].into();
    let mut player = ready_player(&catalog).await;

    assert_eq!(player.current_index(), Some(0));
    assert!(!player.is_playing());
    assert_eq!(
        calls(&player),
        &[
            Call::Load("one.mp3".to_string()),
            Call::SetVolume(0.5),
            Call::SetMuted(false),
        ]
    );

    player.next().unwrap();
    assert_eq!(player.current_index(), Some(0));
    assert!(player.is_playing());
}

#[tokio::test]
async fn empty_catalog_shows_no_tracks() {
    let mut player = ready_player(&Catalog::empty()).await;

    assert_eq!(player.state(), &PlayerState::Empty);
    assert_eq!(
        player.view(),
        PlayerView::Empty {
            message: EMPTY_MESSAGE
        }
    );
    assert!(calls(&player).is_empty());
    assert!(matches!(player.next(), Err(PlaybackError::NotReady("empty"))));
}

#[tokio::test]
async fn failed_fetch_collapses_to_empty() {
    let mut player = PlaybackController::new(RecordingBackend::default(), MemoryStore::new());

    player.load(&FailingSource).await.unwrap();

    assert_eq!(player.state(), &PlayerState::Empty);
    assert_eq!(player.view().to_string(), "No tracks available.");
    assert!(player.catalog().is_empty());
    assert_eq!(
        player.drain_events(),
        vec![PlayerEvent::StateChanged {
            state: PlayerStateEvent::Empty
        }]
    );
}

#[tokio::test]
async fn catalog_loads_only_once() {
    let catalog = four_songs();
    let mut player = ready_player(&catalog).await;

    let second = player.load(&Catalog::empty()).await;
    assert!(matches!(second, Err(PlaybackError::AlreadyLoaded)));
    assert_eq!(player.catalog().len(), 4);
}

#[tokio::test]
async fn commands_before_load_are_rejected() {
    let mut player = PlaybackController::new(RecordingBackend::default(), MemoryStore::new());

    assert!(matches!(player.play(), Err(PlaybackError::NotReady("loading"))));
    assert!(matches!(
        player.set_volume(0.2),
        Err(PlaybackError::NotReady("loading"))
    ));
    assert_eq!(player.view().to_string(), "Loading tracks...");

    // Native callbacks are silently ignored
    player.on_track_ended();
    player.on_time_update(10.0, 20.0);
    assert_eq!(player.state(), &PlayerState::Loading);
}

// ===== Transport =====

#[tokio::test]
async fn next_three_times_then_wrap() {
    let catalog = four_songs();
    let mut player = ready_player(&catalog).await;

    for _ in 0..3 {
        player.next().unwrap();
    }
    assert_eq!(player.current_index(), Some(3));
    assert_eq!(player.current_track().unwrap().title, "Song 4");

    player.next().unwrap();
    assert_eq!(player.current_index(), Some(0));
}

#[tokio::test]
async fn skip_reloads_restarts_and_plays() {
    let catalog = four_songs();
    let mut player = ready_player(&catalog).await;
    player.on_time_update(50.0, 100.0);

    player.previous().unwrap();

    assert_eq!(player.current_index(), Some(3));
    assert_eq!(player.progress(), 0.0);
    assert_eq!(
        &calls(&player)[3..],
        &[
            Call::Load("https://example.com/4.mp3".to_string()),
            Call::SeekToStart,
            Call::Play,
        ]
    );
}

#[tokio::test]
async fn play_pause_issue_commands_once() {
    let catalog = four_songs();
    let mut player = ready_player(&catalog).await;
    let baseline = calls(&player).len();

    player.play().unwrap();
    player.play().unwrap();
    player.pause().unwrap();
    player.pause().unwrap();

    assert_eq!(&calls(&player)[baseline..], &[Call::Play, Call::Pause]);
}

#[tokio::test]
async fn toggle_playback_flips_state() {
    let catalog = four_songs();
    let mut player = ready_player(&catalog).await;

    player.toggle_playback().unwrap();
    assert!(player.is_playing());

    player.toggle_playback().unwrap();
    assert!(!player.is_playing());
}

#[tokio::test]
async fn track_end_auto_advances_forever() {
    let catalog = four_songs();
    let mut player = ready_player(&catalog).await;
    player.play().unwrap();

    for _ in 0..9 {
        player.on_track_ended();
    }

    assert_eq!(player.current_index(), Some(1));
    assert!(player.is_playing());
}

#[tokio::test]
async fn time_update_sets_progress() {
    let catalog = four_songs();
    let mut player = ready_player(&catalog).await;
    let baseline = calls(&player).len();

    player.on_time_update(30.0, 120.0);
    assert_eq!(player.progress(), 25.0);

    player.on_time_update(31.0, f64::NAN);
    player.on_time_update(32.0, 0.0);
    assert_eq!(player.progress(), 25.0);

    assert_eq!(calls(&player).len(), baseline);
}

// ===== Volume =====

#[tokio::test]
async fn volume_is_restored_and_persisted() {
    let catalog = four_songs();
    let store = MemoryStore::with_value(SETTING_VOLUME, "0.8");
    let mut player = PlaybackController::new(RecordingBackend::default(), store);
    assert_eq!(player.volume(), 0.8);

    player.load(&catalog).await.unwrap();
    assert!(calls(&player).contains(&Call::SetVolume(0.8)));

    player.set_volume(0.35).unwrap();
    assert_eq!(
        player.store().get(SETTING_VOLUME).as_deref(),
        Some("0.35")
    );
    assert_eq!(
        &calls(&player)[calls(&player).len() - 2..],
        &[Call::SetVolume(0.35), Call::SetMuted(false)]
    );
}

#[tokio::test]
async fn negative_stored_volume_restores_default() {
    let store = MemoryStore::with_value(SETTING_VOLUME, "-0.5");
    let mut player = PlaybackController::new(RecordingBackend::default(), store);
    player.load(&four_songs()).await.unwrap();

    assert_eq!(player.volume(), 0.5);
    assert!(!player.is_muted());
    assert_eq!(
        &calls(&player)[1..],
        &[Call::SetVolume(0.5), Call::SetMuted(false)]
    );
}

#[tokio::test]
async fn zero_volume_mutes() {
    let catalog = four_songs();
    let mut player = ready_player(&catalog).await;

    player.set_volume(0.0).unwrap();
    assert!(player.is_muted());

    player.set_volume(0.01).unwrap();
    assert!(!player.is_muted());
}

#[tokio::test]
async fn out_of_range_volume_is_clamped_and_nan_rejected() {
    let catalog = four_songs();
    let mut player = ready_player(&catalog).await;

    player.set_volume(3.0).unwrap();
    assert_eq!(player.volume(), 1.0);

    assert!(matches!(
        player.set_volume(f32::NAN),
        Err(PlaybackError::InvalidVolume(_))
    ));
    assert_eq!(player.volume(), 1.0);
}

#[tokio::test]
async fn double_toggle_mute_restores_everything() {
    let catalog = four_songs();
    let mut player = ready_player(&catalog).await;
    player.set_volume(0.6).unwrap();

    player.toggle_mute().unwrap();
    assert!(player.is_muted());
    assert_eq!(player.volume(), 0.6);

    player.toggle_mute().unwrap();
    assert!(!player.is_muted());
    assert_eq!(player.volume(), 0.6);
    assert_eq!(
        player.store().get(SETTING_VOLUME).as_deref(),
        Some("0.6")
    );
}

#[tokio::test]
async fn store_write_failure_does_not_fail_command() {
    let catalog = four_songs();
    let mut player = PlaybackController::new(RecordingBackend::default(), ReadOnlyStore);
    assert_eq!(player.volume(), 0.3);
    player.load(&catalog).await.unwrap();

    player.set_volume(0.9).unwrap();
    assert_eq!(player.volume(), 0.9);
}

// ===== Backend failures =====

#[tokio::test]
async fn play_failure_reverts_to_paused_with_error() {
    let catalog = four_songs();
    let mut player = PlaybackController::new(
        RecordingBackend::failing("unsupported source"),
        MemoryStore::new(),
    );
    player.load(&catalog).await.unwrap();
    player.drain_events();

    player.play().unwrap();

    assert!(!player.is_playing());
    match player.view() {
        PlayerView::Ready(now) => assert_eq!(
            now.error,
            Some("Audio backend error: unsupported source")
        ),
        other => panic!("expected ready view, got {other:?}"),
    }
    assert!(player.drain_events().contains(&PlayerEvent::Error {
        message: "Audio backend error: unsupported source".to_string()
    }));
}

#[tokio::test]
async fn reported_playback_error_is_surfaced() {
    let catalog = four_songs();
    let mut player = ready_player(&catalog).await;
    player.play().unwrap();

    player.on_playback_error("decode error");

    assert!(!player.is_playing());
    assert!(player.view().to_string().ends_with("error: decode error"));
}

// ===== Teardown =====

#[tokio::test]
async fn drop_releases_backend() {
    let backend = RecordingBackend::default();
    let released = Rc::clone(&backend.released);

    let mut player = PlaybackController::new(backend, MemoryStore::new());
    player.load(&four_songs()).await.unwrap();
    assert!(!released.get());

    drop(player);
    assert!(released.get());
}
