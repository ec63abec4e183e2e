/// Core traits for Tunebox
use crate::catalog::Catalog;
use crate::error::Result;
use async_trait::async_trait;

/// Source of the track catalog
///
/// Implementers fetch the complete catalog in one shot. The player calls
/// this exactly once per session.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full catalog
    ///
    /// # Errors
    /// Returns an error if the catalog cannot be reached or decoded
    async fn fetch_catalog(&self) -> Result<Catalog>;
}

/// An in-memory catalog is its own source
#[async_trait]
impl CatalogSource for Catalog {
    async fn fetch_catalog(&self) -> Result<Catalog> {
        Ok(self.clone())
    }
}
