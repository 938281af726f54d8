//! Capability traits for external collaborators

use crate::error::Result;
use crate::types::{NewSongRecord, SongRecord};
use async_trait::async_trait;

/// Capability interface of the hosted song-storage collaborator.
///
/// Two operations: insert a song row and list all rows. No transaction or
/// migration semantics; failures surface as errors and callers degrade to
/// "state unchanged".
#[async_trait]
pub trait SongStore: Send + Sync {
    /// Insert a new song row.
    async fn insert_song(&self, song: NewSongRecord) -> Result<()>;

    /// List all song rows, in collaborator order.
    async fn list_songs(&self) -> Result<Vec<SongRecord>>;
}
