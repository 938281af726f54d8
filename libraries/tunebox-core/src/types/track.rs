/// Track domain type
use serde::{Deserialize, Serialize};

/// A playable catalog entry.
///
/// Tracks are value objects: they are created once (seed data or remote
/// normalization) and never mutated in place. Identity is the integer `id`,
/// unique within a catalog snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier within a catalog snapshot
    pub id: i64,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Cover image reference (URL)
    pub cover: String,

    /// Playable media reference (URL)
    pub url: String,

    /// Human-readable duration, e.g. "3:45" (if known)
    pub duration: Option<String>,

    /// Genre tag
    pub genre: String,

    /// Mood tag
    pub mood: String,

    /// Category tag
    pub category: String,

    /// Download reference, if the track can be saved locally
    pub download_url: Option<String>,
}

impl Track {
    /// Create a track with the minimum required fields.
    ///
    /// Tag fields default to "Unknown"; cover, duration, and download
    /// reference are left unset.
    pub fn new(id: i64, title: impl Into<String>, artist: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
            cover: String::new(),
            url: url.into(),
            duration: None,
            genre: "Unknown".to_string(),
            mood: "Unknown".to_string(),
            category: "Unknown".to_string(),
            download_url: None,
        }
    }
}
