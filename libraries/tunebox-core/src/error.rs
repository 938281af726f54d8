/// Core error types for TuneBox
use thiserror::Error;

/// Result type alias using `TuneboxError`
pub type Result<T> = std::result::Result<T, TuneboxError>;

/// Unified error type shared across TuneBox crates.
#[derive(Error, Debug)]
pub enum TuneboxError {
    /// Song-storage collaborator errors
    #[error("Store error: {0}")]
    Store(String),

    /// Network-level errors
    #[error("Network error: {0}")]
    Network(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl TuneboxError {
    /// Create a store error
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
