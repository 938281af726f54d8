/// Per-session user profile snapshot
use crate::types::Track;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of the per-session user profile.
///
/// Produced by the session manager for the view layer. The profile is reset
/// on every process start; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Recently played tracks, most recent first, capped at 50
    pub listening_history: Vec<Track>,

    /// Favorited tracks in insertion order
    pub favorites: Vec<Track>,

    /// Tracks uploaded during this session (tracked for future use)
    pub uploaded_songs: Vec<Track>,

    /// When this session's profile was created
    pub joined_at: DateTime<Utc>,
}

impl UserProfile {
    /// Create an empty profile joined now.
    pub fn new() -> Self {
        Self {
            listening_history: Vec::new(),
            favorites: Vec::new(),
            uploaded_songs: Vec::new(),
            joined_at: Utc::now(),
        }
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new()
    }
}
