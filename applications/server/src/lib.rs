//! Tunebox Server Library
//!
//! Read-only song catalog over HTTP. Serves the song list consumed by the
//! Tunebox player at `GET /api/songs`.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod state;

use axum::{routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, TraceLayer},
};
use tracing::Level;

// Re-export commonly used types for convenience
pub use catalog::CatalogProvider;
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;

/// Build the HTTP router
///
/// `cors` adds a permissive CORS layer so browser players on any origin can
/// read the catalog.
pub fn create_router(app_state: AppState, cors: bool) -> Router {
    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/songs", get(api::songs::list_songs))
        .route("/songs/", get(api::songs::list_songs));

    let router = Router::new()
        .nest("/api", api_routes)
        .fallback(api::not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO)),
        )
        .with_state(app_state);

    if cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
