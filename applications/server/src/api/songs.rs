/// Songs API routes
use crate::state::AppState;
use axum::{extract::State, Json};
use tunebox_core::SongRecord;

/// GET /api/songs
///
/// The whole catalog in serving order. No pagination or filtering.
pub async fn list_songs(State(app_state): State<AppState>) -> Json<Vec<SongRecord>> {
    let songs = app_state.catalog.list_tracks().to_vec();
    tracing::info!(count = songs.len(), "Serving song catalog");
    Json(songs)
}
