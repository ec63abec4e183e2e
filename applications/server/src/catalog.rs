/// In-memory song catalog served by `GET /api/songs`
use crate::error::Result;
use std::path::Path;
use tunebox_core::{SongRecord, TuneboxError};

/// Fixed, ordered list of songs. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct CatalogProvider {
    songs: Vec<SongRecord>,
}

impl CatalogProvider {
    /// The four demo songs compiled into the server
    pub fn builtin() -> Self {
        Self::with_songs(vec![
            SongRecord::new(
                1,
                "Song One",
                "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-1.mp3",
                Some("https://wallpapercave.com/wp/wp2836127.jpg".to_string()),
            ),
            SongRecord::new(
                2,
                "Song Two",
                "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-2.mp3",
                Some(
                    "https://tse4.mm.bing.net/th?id=OIP.iau-5ckARTa23AR3n35AogHaEB&pid=Api&P=0&h=220"
                        .to_string(),
                ),
            ),
            SongRecord::new(
                3,
                "Song Three",
                "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-3.mp3",
                Some(
                    "https://storage.needpix.com/rsynced_images/musical-background-2842924_1280.jpg"
                        .to_string(),
                ),
            ),
            SongRecord::new(
                4,
                "Song Four",
                "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-4.mp3",
                Some(
                    "https://tse2.mm.bing.net/th?id=OIP.dxRJSrs7-_kjv_pZg8EK9gHaEo&pid=Api&P=0&h=220"
                        .to_string(),
                ),
            ),
        ])
    }

    pub fn with_songs(songs: Vec<SongRecord>) -> Self {
        Self { songs }
    }

    /// Read the song list from a JSON array on disk
    ///
    /// The file uses the same shape the API returns.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let songs: Vec<SongRecord> = serde_json::from_str(&data).map_err(TuneboxError::from)?;
        tracing::info!(path = %path.display(), songs = songs.len(), "Loaded catalog file");
        Ok(Self::with_songs(songs))
    }

    /// All songs in serving order
    pub fn list_tracks(&self) -> &[SongRecord] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

impl Default for CatalogProvider {
    fn default() -> Self {
        Self::builtin()
    }
}
