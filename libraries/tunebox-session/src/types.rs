//! Core types for session management

use serde::{Deserialize, Serialize};

/// Transport state of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transport {
    /// No track loaded
    Idle,

    /// Track loaded, not playing
    Paused,

    /// Track loaded and playing
    Playing,
}

/// Configuration for the session manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Maximum listening-history size (default: 50)
    pub history_size: usize,

    /// Initial volume (0-100, default: 75)
    pub volume: u8,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_size: 50,
            volume: 75,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.history_size, 50);
        assert_eq!(config.volume, 75);
    }
}
