//! Listening history
//!
//! Bounded, deduplicated history of played tracks. Re-playing a track moves
//! it to the front rather than duplicating it; the list is capped at the
//! configured size, discarding the oldest entries.

use std::collections::VecDeque;
use tunebox_core::Track;

/// Listening history with move-to-front semantics.
///
/// Most recent entry is at the front. Entries are unique by track id.
#[derive(Debug, Clone)]
pub struct ListeningHistory {
    /// History buffer (most recent = front)
    tracks: VecDeque<Track>,

    /// Maximum history size
    max_size: usize,
}

impl ListeningHistory {
    /// Create a new history with the specified maximum size.
    pub fn new(max_size: usize) -> Self {
        Self {
            tracks: VecDeque::with_capacity(max_size),
            max_size,
        }
    }

    /// Record a play.
    ///
    /// Any existing entry with the same id is removed first, then the track
    /// is prepended. The list is truncated to the most recent `max_size`.
    pub fn record(&mut self, track: Track) {
        self.tracks.retain(|t| t.id != track.id);
        self.tracks.push_front(track);
        self.tracks.truncate(self.max_size);
    }

    /// Most recent track (without removing).
    pub fn most_recent(&self) -> Option<&Track> {
        self.tracks.front()
    }

    /// All history entries, most recent first.
    pub fn entries(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }

    /// Number of tracks in history.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if history is empty.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Clear all history.
    pub fn clear(&mut self) {
        self.tracks.clear();
    }
}

impl Default for ListeningHistory {
    fn default() -> Self {
        Self::new(50)
    }
}
