//! Session Events
//!
//! Event-based communication for UI synchronization. The manager queues
//! events as state changes happen; the view layer drains them with
//! `SessionManager::take_events` and re-renders.

use crate::types::Transport;
use serde::{Deserialize, Serialize};

/// Events emitted by the session manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// Transport state changed (play/pause/idle)
    StateChanged {
        /// The new transport state
        state: Transport,
    },

    /// Current track changed
    ///
    /// Emitted once per change, including the atomic ended-to-next
    /// transition. Consumers never observe an intermediate paused state
    /// during auto-advance.
    TrackChanged {
        /// Id of the new current track
        track_id: i64,
        /// Id of the previous track (if any)
        previous_track_id: Option<i64>,
    },

    /// Volume changed
    VolumeChanged {
        /// New volume level (0-100)
        level: u8,
    },

    /// Catalog was replaced by a remote merge
    CatalogUpdated {
        /// New catalog length
        length: usize,
    },

    /// A download was requested for a track with a download reference
    DownloadRequested {
        /// Track to save
        track_id: i64,
        /// Download URL
        url: String,
    },

    /// A story was prepended to the feed
    StoryAdded {
        /// Id of the new story
        story_id: i64,
    },
}
