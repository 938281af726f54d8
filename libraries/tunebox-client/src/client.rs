//! HTTP client for the hosted song-storage service.

use crate::error::{ClientError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use tunebox_core::{NewSongRecord, SongRecord, SongStore};

/// Configuration for connecting to the song-storage service.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the service (e.g. "https://xyzcompany.example.co")
    pub url: String,
    /// Public API key sent with every request
    pub api_key: String,
}

impl StoreConfig {
    /// Create a new store config.
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
        }
    }
}

/// Client for the hosted song-storage service.
///
/// Two operations: list all song rows and insert one. The client validates
/// and normalizes the base URL at construction and sends the API key with
/// every request.
///
/// # Example
///
/// ```ignore
/// use tunebox_client::{SongStoreClient, StoreConfig};
///
/// let config = StoreConfig::new("https://store.example.com", "anon-key");
/// let client = SongStoreClient::new(config)?;
/// let rows = client.list_songs().await?;
/// println!("Found {} songs", rows.len());
/// ```
pub struct SongStoreClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl SongStoreClient {
    /// Create a new client with the given configuration.
    pub fn new(config: StoreConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("TuneBox/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key,
        })
    }

    /// The normalized service URL.
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// List all song rows, in service order.
    pub async fn list_songs(&self) -> Result<Vec<SongRecord>> {
        let url = format!("{}/rest/v1/songs?select=*", self.base_url);
        debug!(url = %url, "Fetching song rows");

        let response = self
            .http
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    ClientError::ServiceUnreachable(e.to_string())
                } else {
                    ClientError::Request(e)
                }
            })?;

        let status = response.status();

        if status.is_success() {
            let rows: Vec<SongRecord> = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse song rows: {}", e))
            })?;

            debug!(rows = rows.len(), "Fetched song rows");
            Ok(rows)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Insert a new song row.
    pub async fn insert_song(&self, song: NewSongRecord) -> Result<()> {
        let url = format!("{}/rest/v1/songs", self.base_url);
        debug!(url = %url, title = %song.title, artist = %song.artist, "Inserting song row");

        let response = self
            .http
            .post(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .json(&song)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    ClientError::ServiceUnreachable(e.to_string())
                } else {
                    ClientError::Request(e)
                }
            })?;

        let status = response.status();

        if status.is_success() {
            debug!(title = %song.title, "Song row inserted");
            Ok(())
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}

#[async_trait]
impl SongStore for SongStoreClient {
    async fn insert_song(&self, song: NewSongRecord) -> tunebox_core::Result<()> {
        SongStoreClient::insert_song(self, song)
            .await
            .map_err(Into::into)
    }

    async fn list_songs(&self) -> tunebox_core::Result<Vec<SongRecord>> {
        SongStoreClient::list_songs(self).await.map_err(Into::into)
    }
}
