//! Error types for session management

use thiserror::Error;
use tunebox_core::TuneboxError;

/// Session errors.
///
/// Most session operations degrade to "state unchanged" instead of failing;
/// errors here surface only from collaborator round-trips.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Uploading a song to the storage collaborator failed; nothing was
    /// written and the catalog is unchanged.
    #[error("Upload failed: {0}")]
    Upload(#[source] TuneboxError),

    /// Fetching rows from the storage collaborator failed; the catalog is
    /// unchanged.
    #[error("Catalog fetch failed: {0}")]
    Fetch(#[source] TuneboxError),
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
