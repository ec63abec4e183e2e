/// API route modules
pub mod health;
pub mod songs;

use crate::error::ServerError;
use axum::http::Uri;

/// Fallback for anything outside the routed paths
pub async fn not_found(uri: Uri) -> ServerError {
    ServerError::NotFound(uri.path().to_string())
}
