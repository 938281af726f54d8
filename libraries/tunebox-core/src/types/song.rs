/// Wire types for the song-storage collaborator
use serde::{Deserialize, Serialize};

/// A song row as returned by the storage collaborator.
///
/// Tag fields and the cover reference are nullable on the wire; the
/// catalog normalization layer fills in the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongRecord {
    /// Row identifier assigned by the collaborator
    pub id: i64,

    /// Song title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Playable media URL
    pub url: String,

    /// Genre tag, if set
    pub genre: Option<String>,

    /// Mood tag, if set
    pub mood: Option<String>,

    /// Cover image URL, if set
    pub cover_image: Option<String>,
}

/// Payload for inserting a new song row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSongRecord {
    /// Song title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Playable media URL
    pub url: String,

    /// Genre tag
    pub genre: String,

    /// Mood tag
    pub mood: String,

    /// Cover image URL
    pub cover_image: String,
}
