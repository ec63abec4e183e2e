//! Domain types shared between the catalog server and the player

use serde::{Deserialize, Serialize};

/// Cover shown when a song record carries no artwork
pub const DEFAULT_COVER_URL: &str = "default-cover.jpg";

/// Song as served by `GET /api/songs`
///
/// Field names follow the JSON contract (`previewUrl`, `coverUrl`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongRecord {
    /// Numeric identifier, stable within one server build
    pub id: u32,

    /// Display name
    pub name: String,

    /// Location of the playable audio
    pub preview_url: String,

    /// Location of the cover image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
}

impl SongRecord {
    /// Create a new song record
    pub fn new(
        id: u32,
        name: impl Into<String>,
        preview_url: impl Into<String>,
        cover_url: Option<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            preview_url: preview_url.into(),
            cover_url,
        }
    }
}

/// Playable item as seen by the player
///
/// Identity is positional: a track is addressed by its index in the
/// [`Catalog`](crate::Catalog) it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Track title
    pub title: String,

    /// Audio source location
    pub source_url: String,

    /// Cover image location
    pub cover_url: String,
}

impl Track {
    /// Create a new track
    pub fn new(
        title: impl Into<String>,
        source_url: impl Into<String>,
        cover_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            source_url: source_url.into(),
            cover_url: cover_url.into(),
        }
    }
}

impl From<SongRecord> for Track {
    fn from(record: SongRecord) -> Self {
        let cover_url = record
            .cover_url
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_COVER_URL.to_string());

        Self {
            title: record.name,
            source_url: record.preview_url,
            cover_url,
        }
    }
}
