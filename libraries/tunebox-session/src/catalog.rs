//! Track catalog
//!
//! Reconciles the immutable seed catalog with rows fetched from the
//! song-storage collaborator into one in-memory view. Seed entries always
//! come first, in fixed order; remote entries follow in collaborator order.

use tracing::{debug, warn};
use tunebox_core::{SongRecord, Track};

/// Tag default for remote rows missing genre/mood (and for category, which
/// the collaborator does not carry).
pub const UNKNOWN_TAG: &str = "Unknown";

/// Cover placeholder for remote rows missing a cover image.
pub const PLACEHOLDER_COVER: &str =
    "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=400&h=400&fit=crop";

/// Duration placeholder: collaborator rows carry no duration.
pub const PLACEHOLDER_DURATION: &str = "--:--";

/// Offset applied to remote row ids so they can never collide with seed ids.
pub const REMOTE_ID_BASE: i64 = 1_000_000;

/// Normalize a collaborator row into the canonical `Track` shape.
///
/// All field defaults live here, in one place. Remote rows carry no
/// duration and no download reference.
pub fn normalize_song(row: SongRecord) -> Track {
    Track {
        id: REMOTE_ID_BASE + row.id,
        title: row.title,
        artist: row.artist,
        cover: row.cover_image.unwrap_or_else(|| PLACEHOLDER_COVER.to_string()),
        url: row.url,
        duration: Some(PLACEHOLDER_DURATION.to_string()),
        genre: row.genre.unwrap_or_else(|| UNKNOWN_TAG.to_string()),
        mood: row.mood.unwrap_or_else(|| UNKNOWN_TAG.to_string()),
        category: UNKNOWN_TAG.to_string(),
        download_url: None,
    }
}

/// Ticket identifying one catalog refresh attempt.
///
/// Tickets are monotonic; a completion whose ticket is not newer than the
/// last applied one is stale and gets dropped, so a slow in-flight refresh
/// cannot overwrite a newer result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

/// The merged in-memory catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Immutable seed slice, always first
    seed: Vec<Track>,

    /// Merged view: seed followed by normalized remote rows
    tracks: Vec<Track>,

    /// Last issued refresh ticket
    issued: u64,

    /// Last applied refresh ticket
    applied: u64,
}

impl Catalog {
    /// Create a catalog containing only the seed slice.
    pub fn new(seed: Vec<Track>) -> Self {
        let tracks = seed.clone();
        Self {
            seed,
            tracks,
            issued: 0,
            applied: 0,
        }
    }

    /// The current catalog snapshot, seed entries first.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Number of tracks in the snapshot.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Position of a track in the snapshot, by id.
    pub fn position(&self, id: i64) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == id)
    }

    /// Start a refresh attempt.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.issued += 1;
        debug!(ticket = self.issued, "Catalog refresh started");
        RefreshTicket(self.issued)
    }

    /// Apply fetched rows for a refresh attempt.
    ///
    /// Replaces the catalog with seed-concat-normalized-remote. Returns
    /// false (catalog untouched) if a newer refresh already applied.
    pub fn complete_refresh(&mut self, ticket: RefreshTicket, rows: Vec<SongRecord>) -> bool {
        if ticket.0 <= self.applied {
            warn!(
                ticket = ticket.0,
                applied = self.applied,
                "Dropping stale catalog refresh"
            );
            return false;
        }
        self.applied = ticket.0;

        let remote = rows.into_iter().map(normalize_song);
        self.tracks = self.seed.iter().cloned().chain(remote).collect();

        debug!(
            ticket = ticket.0,
            total = self.tracks.len(),
            seed = self.seed.len(),
            "Catalog refresh applied"
        );
        true
    }

    // ===== Query operations (pure reads over the snapshot) =====

    /// Tracks whose genre equals `genre` (case-insensitive).
    pub fn by_genre(&self, genre: &str) -> Vec<&Track> {
        let genre = genre.to_lowercase();
        self.tracks
            .iter()
            .filter(|t| t.genre.to_lowercase() == genre)
            .collect()
    }

    /// Tracks whose category equals `category` (case-insensitive).
    pub fn by_category(&self, category: &str) -> Vec<&Track> {
        let category = category.to_lowercase();
        self.tracks
            .iter()
            .filter(|t| t.category.to_lowercase() == category)
            .collect()
    }

    /// Tracks whose artist contains `artist` (case-insensitive substring).
    pub fn by_artist(&self, artist: &str) -> Vec<&Track> {
        let artist = artist.to_lowercase();
        self.tracks
            .iter()
            .filter(|t| t.artist.to_lowercase().contains(&artist))
            .collect()
    }

    /// Tracks where `query` is a case-insensitive substring of title,
    /// artist, genre, mood, or category. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Track> {
        let query = query.to_lowercase();
        self.tracks
            .iter()
            .filter(|t| {
                t.title.to_lowercase().contains(&query)
                    || t.artist.to_lowercase().contains(&query)
                    || t.genre.to_lowercase().contains(&query)
                    || t.mood.to_lowercase().contains(&query)
                    || t.category.to_lowercase().contains(&query)
            })
            .collect()
    }
}
