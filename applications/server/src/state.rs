/// Shared application state
use crate::catalog::CatalogProvider;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogProvider>,
}

impl AppState {
    pub fn new(catalog: Arc<CatalogProvider>) -> Self {
        Self { catalog }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(CatalogProvider::builtin()))
    }
}
