//! Catalog synchronization with the song-storage collaborator
//!
//! Async glue between the session manager and the remote store. A refresh
//! runs once at startup and again after each successful upload. Refreshes
//! go through the manager's ticket protocol, so a slow in-flight fetch can
//! never overwrite a newer result.

use crate::error::{Result, SessionError};
use crate::manager::SessionManager;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use tunebox_core::{NewSongRecord, SongStore};

/// Drives catalog refreshes and uploads against the storage collaborator.
#[derive(Clone)]
pub struct CatalogSync {
    manager: Arc<Mutex<SessionManager>>,
    store: Arc<dyn SongStore>,
}

impl CatalogSync {
    /// Create a sync handle over a shared manager and store.
    ///
    /// Does not touch the catalog; use [`CatalogSync::bootstrap`] to also
    /// run the startup refresh.
    pub fn new(manager: Arc<Mutex<SessionManager>>, store: Arc<dyn SongStore>) -> Self {
        Self { manager, store }
    }

    /// Create a sync handle and run the startup catalog refresh.
    ///
    /// A fetch failure is logged and the catalog stays seed-only; the
    /// handle is returned either way.
    pub async fn bootstrap(
        manager: Arc<Mutex<SessionManager>>,
        store: Arc<dyn SongStore>,
    ) -> Self {
        let sync = Self::new(manager, store);
        if let Err(err) = sync.refresh().await {
            warn!(error = %err, "Startup catalog refresh failed, keeping seed catalog");
        }
        sync
    }

    /// Fetch all rows and merge them into the catalog.
    ///
    /// On fetch failure the catalog is left unchanged and the error is
    /// returned for logging; there is no retry. Returns true when the fetch
    /// succeeded and its result was applied (i.e. it was not stale).
    pub async fn refresh(&self) -> Result<bool> {
        let ticket = self.manager.lock().await.begin_catalog_refresh();

        match self.store.list_songs().await {
            Ok(rows) => {
                debug!(rows = rows.len(), "Fetched song rows");
                let applied = self.manager.lock().await.complete_catalog_refresh(ticket, rows);
                Ok(applied)
            }
            Err(err) => {
                self.manager.lock().await.fail_catalog_refresh(ticket, &err);
                Err(SessionError::Fetch(err))
            }
        }
    }

    /// Insert a song row, then refresh the catalog.
    ///
    /// An insert failure aborts the operation with the underlying message
    /// and writes nothing; the caller surfaces it to the user.
    pub async fn upload(&self, song: NewSongRecord) -> Result<()> {
        let title = song.title.clone();
        self.store
            .insert_song(song)
            .await
            .map_err(SessionError::Upload)?;

        info!(title = %title, "Song uploaded, reloading catalog");

        // The upload succeeded even if the follow-up fetch does not; the
        // row will appear on the next refresh.
        let _ = self.refresh().await;
        Ok(())
    }
}
