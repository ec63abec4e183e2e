//! Catalog client for the Tunebox server.

use crate::error::{ClientError, Result};
use crate::types::{ClientConfig, HealthResponse};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};
use tunebox_core::{Catalog, CatalogSource, SongRecord};

/// Client for reading the song catalog from a Tunebox server.
///
/// # Example
///
/// ```ignore
/// use tunebox_client::{CatalogClient, ClientConfig};
///
/// let client = CatalogClient::new(ClientConfig::default())?;
/// let songs = client.list_songs().await?;
/// println!("Found {} songs", songs.len());
/// ```
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        // Validate URL
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let base_url = config.url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        // Create HTTP client with reasonable defaults
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Tunebox/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Get the server URL.
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full song list, in server order.
    pub async fn list_songs(&self) -> Result<Vec<SongRecord>> {
        let url = format!("{}/api/songs", self.base_url);
        debug!(url = %url, "Fetching song catalog");

        let songs: Vec<SongRecord> = self.get_json(&url).await?;
        info!(songs = songs.len(), "Fetched song catalog");

        Ok(songs)
    }

    /// Check that the server is up.
    pub async fn health(&self) -> Result<HealthResponse> {
        let url = format!("{}/api/health", self.base_url);
        debug!(url = %url, "Checking server health");

        self.get_json(&url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.http.get(url).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ClientError::ServerUnreachable(e.to_string())
            } else {
                ClientError::Request(e)
            }
        })?;

        let response = check_status(response).await?;
        let body = response.text().await?;

        serde_json::from_str(&body)
            .map_err(|e| ClientError::ParseError(format!("Failed to parse {}: {}", url, e)))
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();

    if status.is_success() {
        Ok(response)
    } else {
        let error_text = response.text().await.unwrap_or_default();
        Err(ClientError::ServerError {
            status: status.as_u16(),
            message: error_text,
        })
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn fetch_catalog(&self) -> tunebox_core::Result<Catalog> {
        let songs = self.list_songs().await?;
        Ok(Catalog::from_records(songs))
    }
}
