//! TuneBox Song-Store Client
//!
//! HTTP client for the hosted song-storage service.
//!
//! # Features
//!
//! - **List**: fetch all song rows for catalog merging
//! - **Insert**: add a song row after an upload
//! - Implements `tunebox_core::SongStore`, so the session layer stays
//!   transport-agnostic
//!
//! # Example
//!
//! ```ignore
//! use tunebox_client::{SongStoreClient, StoreConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StoreConfig::new("https://store.example.com", "anon-key");
//!     let client = SongStoreClient::new(config)?;
//!
//!     let rows = client.list_songs().await?;
//!     println!("Found {} songs", rows.len());
//!     Ok(())
//! }
//! ```

mod client;
mod error;

// Re-export main types
pub use client::{SongStoreClient, StoreConfig};
pub use error::{ClientError, Result};
