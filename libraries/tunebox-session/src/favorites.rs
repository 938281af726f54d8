//! Favorite tracks
//!
//! Membership is keyed by track id; presentation uses insertion order.

use tunebox_core::Track;

/// Favorites set with insertion-ordered presentation.
#[derive(Debug, Clone, Default)]
pub struct Favorites {
    tracks: Vec<Track>,
}

impl Favorites {
    /// Create an empty favorites set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a track to favorites.
    ///
    /// Idempotent: returns false without modifying the set if a favorite
    /// with the same id already exists.
    pub fn add(&mut self, track: Track) -> bool {
        if self.contains(track.id) {
            return false;
        }
        self.tracks.push(track);
        true
    }

    /// Remove all favorites matching the id. No-op if absent.
    pub fn remove(&mut self, id: i64) {
        self.tracks.retain(|t| t.id != id);
    }

    /// Check membership by id.
    pub fn contains(&self, id: i64) -> bool {
        self.tracks.iter().any(|t| t.id == id)
    }

    /// All favorites in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }

    /// Number of favorites.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
