//! Error types for the song-store client.

use thiserror::Error;
use tunebox_core::TuneboxError;

/// Errors that can occur when talking to the song-storage service.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Service returned an error response
    #[error("Store error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Invalid service URL
    #[error("Invalid store URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse a service response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Service is offline or unreachable
    #[error("Store unreachable: {0}")]
    ServiceUnreachable(String),
}

impl From<ClientError> for TuneboxError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Request(e) => TuneboxError::Network(e.to_string()),
            ClientError::ServiceUnreachable(msg) => TuneboxError::Network(msg),
            ClientError::InvalidUrl(msg) => TuneboxError::InvalidInput(msg),
            ClientError::ServerError { status, message } => {
                TuneboxError::Store(format!("status {status}: {message}"))
            }
            ClientError::ParseError(msg) => TuneboxError::Store(msg),
        }
    }
}

/// Result type for song-store client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
