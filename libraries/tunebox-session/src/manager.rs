//! Session state manager - core orchestration
//!
//! Single authoritative owner of playback transport, the merged catalog,
//! listening history, favorites, the story feed, and the per-session user
//! profile. The view layer reads state through the accessors, requests
//! mutations through the operations below, and drains `SessionEvent`s to
//! re-render. No other component mutates this state or commands the platform
//! media resource.

use crate::{
    catalog::{Catalog, RefreshTicket},
    events::SessionEvent,
    favorites::Favorites,
    history::ListeningHistory,
    media::{MediaElement, NoopMedia},
    types::{SessionConfig, Transport},
};
use chrono::{DateTime, Utc};
use tracing::{debug, error, warn};
use tunebox_core::{seed, SongRecord, Story, StoryMode, Track, TuneboxError, UserProfile};

/// Direction for track navigation.
#[derive(Debug, Clone, Copy)]
enum Step {
    Next,
    Previous,
}

/// Central session management.
pub struct SessionManager {
    // Transport
    transport: Transport,
    current_track: Option<Track>,
    elapsed_secs: f64,
    duration_secs: Option<f64>,
    volume: u8,

    // Owned collections
    catalog: Catalog,
    history: ListeningHistory,
    favorites: Favorites,
    uploaded_songs: Vec<Track>,
    stories: Vec<Story>,

    // Profile bookkeeping
    joined_at: DateTime<Utc>,

    // Platform media handle, exclusively driven by this manager
    media: Box<dyn MediaElement>,

    // Event queue for UI synchronization
    pending_events: Vec<SessionEvent>,
}

impl SessionManager {
    /// Create a session manager bootstrapped from the seed catalog and
    /// story feed.
    pub fn new(config: SessionConfig, media: Box<dyn MediaElement>) -> Self {
        Self::with_catalog(config, seed::seed_tracks(), media)
    }

    /// Create a session manager with a custom seed catalog.
    pub fn with_catalog(
        config: SessionConfig,
        seed_tracks: Vec<Track>,
        mut media: Box<dyn MediaElement>,
    ) -> Self {
        let volume = config.volume.min(100);
        media.set_volume(volume);

        Self {
            transport: Transport::Idle,
            current_track: None,
            elapsed_secs: 0.0,
            duration_secs: None,
            volume,
            catalog: Catalog::new(seed_tracks),
            history: ListeningHistory::new(config.history_size),
            favorites: Favorites::new(),
            uploaded_songs: Vec::new(),
            stories: seed::seed_stories(),
            joined_at: Utc::now(),
            media,
            pending_events: Vec::new(),
        }
    }

    /// Create a headless manager that drives no media resource.
    pub fn detached(config: SessionConfig) -> Self {
        Self::new(config, Box::new(NoopMedia))
    }

    // ===== Transport control =====

    /// Replace the current track unconditionally.
    ///
    /// Redirects the media resource to the new URL, resets elapsed time, and
    /// clears the reported duration. Does not start playback and does not
    /// touch history. Accepts tracks whose id is absent from the catalog.
    pub fn set_current_track(&mut self, track: Track) {
        self.switch_track(track, false);
    }

    /// Set the playing flag and command the media resource accordingly.
    ///
    /// No-op while no track is loaded: the transport has no playing state
    /// without a current track.
    pub fn set_playing(&mut self, playing: bool) {
        if self.transport == Transport::Idle {
            return;
        }

        let target = if playing {
            Transport::Playing
        } else {
            Transport::Paused
        };
        if self.transport == target {
            return;
        }

        self.transport = target;
        if playing {
            self.media.play();
        } else {
            self.media.pause();
        }
        self.emit(SessionEvent::StateChanged { state: target });
    }

    /// Skip to the next catalog entry, wrapping past the end.
    ///
    /// No-op while no track is loaded. The selected track becomes current
    /// and is recorded in history.
    pub fn play_next(&mut self) {
        self.advance(Step::Next);
    }

    /// Skip to the previous catalog entry, wrapping before the start.
    ///
    /// No-op while no track is loaded. The selected track becomes current
    /// and is recorded in history.
    pub fn play_previous(&mut self) {
        self.advance(Step::Previous);
    }

    /// Seek to a position in seconds and push it to the media resource.
    pub fn seek(&mut self, position_secs: f64) {
        let position = position_secs.max(0.0);
        self.elapsed_secs = position;
        self.media.seek(position);
    }

    /// Set volume (clamped to 0-100) and push it to the media resource.
    pub fn set_volume(&mut self, level: u8) {
        let level = level.min(100);
        if level == self.volume {
            return;
        }
        self.volume = level;
        self.media.set_volume(level);
        self.emit(SessionEvent::VolumeChanged { level });
    }

    fn advance(&mut self, step: Step) {
        let Some(current) = self.current_track.as_ref() else {
            return;
        };
        if self.catalog.is_empty() {
            return;
        }

        let len = self.catalog.len();
        let index = match self.catalog.position(current.id) {
            Some(i) => match step {
                Step::Next => (i + 1) % len,
                Step::Previous => (i + len - 1) % len,
            },
            None => {
                // Current id can vanish when a reload drops its row; restart
                // from the top instead of inheriting a modulo-wrap accident.
                warn!(
                    track_id = current.id,
                    "Current track missing from catalog, falling back to first entry"
                );
                0
            }
        };

        let next = self.catalog.tracks()[index].clone();
        self.switch_track(next, true);
    }

    /// Swap in a new current track as one state change.
    fn switch_track(&mut self, track: Track, record_history: bool) {
        let previous_track_id = self.current_track.as_ref().map(|t| t.id);

        self.media.load(&track.url);
        self.elapsed_secs = 0.0;
        self.duration_secs = None;

        match self.transport {
            Transport::Idle => {
                self.transport = Transport::Paused;
                self.emit(SessionEvent::StateChanged {
                    state: Transport::Paused,
                });
            }
            // The media resource stops on reload; reissue play so the
            // transport flag and the resource stay in agreement.
            Transport::Playing => self.media.play(),
            Transport::Paused => {}
        }

        if record_history {
            self.history.record(track.clone());
        }

        let track_id = track.id;
        self.current_track = Some(track);
        self.emit(SessionEvent::TrackChanged {
            track_id,
            previous_track_id,
        });
    }

    // ===== Media resource callbacks =====

    /// The media resource reported playback progress.
    pub fn handle_time_update(&mut self, position_secs: f64) {
        self.elapsed_secs = position_secs;
    }

    /// The media resource resolved the track's total duration.
    pub fn handle_duration_loaded(&mut self, duration_secs: f64) {
        self.duration_secs = Some(duration_secs);
    }

    /// The media resource reached the end of the current track.
    ///
    /// Advances to the next catalog entry and resumes playback as one
    /// atomic transition: consumers never observe a paused state with the
    /// new track.
    pub fn handle_media_ended(&mut self) {
        if self.current_track.is_none() {
            return;
        }
        if self.transport != Transport::Playing {
            self.transport = Transport::Playing;
            self.emit(SessionEvent::StateChanged {
                state: Transport::Playing,
            });
        }
        self.advance(Step::Next);
    }

    // ===== Favorites and history =====

    /// Add a track to favorites. Idempotent by id.
    pub fn add_to_favorites(&mut self, track: Track) -> bool {
        self.favorites.add(track)
    }

    /// Remove all favorites matching the id. No-op if absent.
    pub fn remove_from_favorites(&mut self, id: i64) {
        self.favorites.remove(id);
    }

    /// Record a play in the listening history (move-to-front, capped).
    pub fn add_to_history(&mut self, track: Track) {
        self.history.record(track);
    }

    // ===== Query operations =====

    /// Tracks with the given genre (case-insensitive exact match).
    pub fn get_tracks_by_genre(&self, genre: &str) -> Vec<&Track> {
        self.catalog.by_genre(genre)
    }

    /// Tracks with the given category (case-insensitive exact match).
    pub fn get_tracks_by_category(&self, category: &str) -> Vec<&Track> {
        self.catalog.by_category(category)
    }

    /// Tracks whose artist contains the given substring (case-insensitive).
    pub fn get_tracks_by_artist(&self, artist: &str) -> Vec<&Track> {
        self.catalog.by_artist(artist)
    }

    /// Tracks matching the query across title, artist, genre, mood, and
    /// category. An empty query returns the full catalog.
    pub fn search_tracks(&self, query: &str) -> Vec<&Track> {
        self.catalog.search(query)
    }

    // ===== Downloads =====

    /// Request a platform save-as action for the track.
    ///
    /// Emits `DownloadRequested` and returns true when the track carries a
    /// download reference; silently returns false otherwise.
    pub fn download_track(&mut self, track: &Track) -> bool {
        match &track.download_url {
            Some(url) => {
                debug!(track_id = track.id, url = %url, "Download requested");
                self.emit(SessionEvent::DownloadRequested {
                    track_id: track.id,
                    url: url.clone(),
                });
                true
            }
            None => false,
        }
    }

    // ===== Stories =====

    /// Prepend a user story to the feed and return its id.
    ///
    /// Ids are unique within the feed: a timestamp-derived id that collides
    /// with an existing story (two stories in the same millisecond) is
    /// bumped until free.
    pub fn add_story(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        content: impl Into<String>,
        genre: impl Into<String>,
        mode: StoryMode,
        audio_url: Option<String>,
    ) -> i64 {
        let mut story = Story::new(title, author, content, genre, mode, audio_url);
        while self.stories.iter().any(|s| s.id == story.id) {
            story.id += 1;
        }
        let story_id = story.id;
        self.stories.insert(0, story);
        self.emit(SessionEvent::StoryAdded { story_id });
        story_id
    }

    // ===== Catalog refresh =====

    /// Start a catalog refresh attempt.
    pub fn begin_catalog_refresh(&mut self) -> RefreshTicket {
        self.catalog.begin_refresh()
    }

    /// Apply fetched rows for a refresh attempt.
    ///
    /// Stale completions (a newer refresh already applied) are dropped.
    pub fn complete_catalog_refresh(&mut self, ticket: RefreshTicket, rows: Vec<SongRecord>) -> bool {
        if self.catalog.complete_refresh(ticket, rows) {
            self.emit(SessionEvent::CatalogUpdated {
                length: self.catalog.len(),
            });
            true
        } else {
            false
        }
    }

    /// Record a failed refresh attempt. The catalog stays unchanged; there
    /// is no retry and no user-visible error.
    pub fn fail_catalog_refresh(&mut self, ticket: RefreshTicket, err: &TuneboxError) {
        error!(ticket = ?ticket, error = %err, "Catalog refresh failed, keeping current catalog");
    }

    // ===== Accessors =====

    /// The current track, if any.
    pub fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    /// Current transport state.
    pub fn transport(&self) -> Transport {
        self.transport
    }

    /// Whether the transport is playing.
    pub fn is_playing(&self) -> bool {
        self.transport == Transport::Playing
    }

    /// Elapsed time within the current track, in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    /// Total duration reported by the media resource, if resolved.
    pub fn duration_secs(&self) -> Option<f64> {
        self.duration_secs
    }

    /// Current volume (0-100).
    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// The merged catalog snapshot.
    pub fn tracks(&self) -> &[Track] {
        self.catalog.tracks()
    }

    /// The story feed, newest first.
    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    /// Listening history, most recent first.
    pub fn history(&self) -> &ListeningHistory {
        &self.history
    }

    /// Favorite tracks.
    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    /// Session join timestamp.
    pub fn joined_at(&self) -> DateTime<Utc> {
        self.joined_at
    }

    /// Snapshot of the per-session user profile.
    pub fn user_profile(&self) -> UserProfile {
        UserProfile {
            listening_history: self.history.entries().cloned().collect(),
            favorites: self.favorites.entries().cloned().collect(),
            uploaded_songs: self.uploaded_songs.clone(),
            joined_at: self.joined_at,
        }
    }

    /// Drain queued events for the view layer.
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.pending_events)
    }

    fn emit(&mut self, event: SessionEvent) {
        self.pending_events.push(event);
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::detached(SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Media double that records every command it receives.
    #[derive(Debug, Clone, PartialEq)]
    enum MediaCommand {
        Load(String),
        Play,
        Pause,
        Seek(f64),
        SetVolume(u8),
    }

    #[derive(Default, Clone)]
    struct RecordingMedia {
        commands: Arc<Mutex<Vec<MediaCommand>>>,
    }

    impl RecordingMedia {
        fn commands(&self) -> Vec<MediaCommand> {
            self.commands.lock().unwrap().clone()
        }
    }

    impl MediaElement for RecordingMedia {
        fn load(&mut self, url: &str) {
            self.commands.lock().unwrap().push(MediaCommand::Load(url.to_string()));
        }
        fn play(&mut self) {
            self.commands.lock().unwrap().push(MediaCommand::Play);
        }
        fn pause(&mut self) {
            self.commands.lock().unwrap().push(MediaCommand::Pause);
        }
        fn seek(&mut self, position_secs: f64) {
            self.commands.lock().unwrap().push(MediaCommand::Seek(position_secs));
        }
        fn set_volume(&mut self, level: u8) {
            self.commands.lock().unwrap().push(MediaCommand::SetVolume(level));
        }
    }

    fn track(id: i64, title: &str) -> Track {
        Track::new(id, title, "Test Artist", format!("https://cdn.example.com/{id}.mp3"))
    }

    fn three_track_manager() -> SessionManager {
        SessionManager::with_catalog(
            SessionConfig::default(),
            vec![track(1, "A"), track(2, "B"), track(3, "C")],
            Box::new(NoopMedia),
        )
    }

    #[test]
    fn starts_idle_with_default_volume() {
        let manager = SessionManager::default();
        assert_eq!(manager.transport(), Transport::Idle);
        assert!(manager.current_track().is_none());
        assert_eq!(manager.volume(), 75);
        assert!(!manager.tracks().is_empty());
    }

    #[test]
    fn set_current_track_moves_idle_to_paused() {
        let mut manager = three_track_manager();
        manager.set_current_track(track(1, "A"));

        assert_eq!(manager.transport(), Transport::Paused);
        assert_eq!(manager.current_track().unwrap().id, 1);
        // Loading a track is not a play: history stays empty
        assert!(manager.history().is_empty());
    }

    #[test]
    fn set_current_track_resets_progress() {
        let mut manager = three_track_manager();
        manager.set_current_track(track(1, "A"));
        manager.handle_time_update(42.0);
        manager.handle_duration_loaded(180.0);

        manager.set_current_track(track(2, "B"));
        assert_eq!(manager.elapsed_secs(), 0.0);
        assert!(manager.duration_secs().is_none());
    }

    #[test]
    fn set_playing_is_noop_when_idle() {
        let mut manager = three_track_manager();
        manager.set_playing(true);
        assert_eq!(manager.transport(), Transport::Idle);
        assert!(manager.take_events().is_empty());
    }

    #[test]
    fn play_pause_commands_media() {
        let media = RecordingMedia::default();
        let mut manager = SessionManager::with_catalog(
            SessionConfig::default(),
            vec![track(1, "A")],
            Box::new(media.clone()),
        );

        manager.set_current_track(track(1, "A"));
        manager.set_playing(true);
        manager.set_playing(false);

        let commands = media.commands();
        assert!(commands.contains(&MediaCommand::Load("https://cdn.example.com/1.mp3".to_string())));
        assert!(commands.contains(&MediaCommand::Play));
        assert!(commands.contains(&MediaCommand::Pause));
    }

    #[test]
    fn next_is_noop_without_current_track() {
        let mut manager = three_track_manager();
        manager.play_next();
        assert!(manager.current_track().is_none());
        assert!(manager.history().is_empty());
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        let mut manager = three_track_manager();
        manager.set_current_track(track(3, "C"));

        manager.play_next();

        assert_eq!(manager.current_track().unwrap().id, 1);
        assert_eq!(manager.history().most_recent().unwrap().id, 1);
    }

    #[test]
    fn previous_wraps_from_first_to_last() {
        let mut manager = three_track_manager();
        manager.set_current_track(track(1, "A"));

        manager.play_previous();

        assert_eq!(manager.current_track().unwrap().id, 3);
        assert_eq!(manager.history().most_recent().unwrap().id, 3);
    }

    #[test]
    fn next_then_previous_round_trips() {
        for start in [1, 2, 3] {
            let mut manager = three_track_manager();
            manager.set_current_track(track(start, "X"));
            manager.play_next();
            manager.play_previous();
            assert_eq!(manager.current_track().unwrap().id, start);
        }
    }

    #[test]
    fn missing_current_id_falls_back_to_first() {
        let mut manager = three_track_manager();
        manager.set_current_track(track(999, "Gone"));

        manager.play_next();

        assert_eq!(manager.current_track().unwrap().id, 1);
    }

    #[test]
    fn ended_transition_is_atomic() {
        let media = RecordingMedia::default();
        let mut manager = SessionManager::with_catalog(
            SessionConfig::default(),
            vec![track(1, "A"), track(2, "B")],
            Box::new(media.clone()),
        );
        manager.set_current_track(track(1, "A"));
        manager.set_playing(true);
        manager.take_events();

        manager.handle_media_ended();

        // Still playing, on the next track, with a single TrackChanged and
        // no intermediate pause observable.
        assert_eq!(manager.transport(), Transport::Playing);
        assert_eq!(manager.current_track().unwrap().id, 2);
        let events = manager.take_events();
        assert_eq!(
            events,
            vec![SessionEvent::TrackChanged {
                track_id: 2,
                previous_track_id: Some(1),
            }]
        );
        assert_eq!(*media.commands().last().unwrap(), MediaCommand::Play);
    }

    #[test]
    fn ended_while_idle_is_noop() {
        let mut manager = three_track_manager();
        manager.handle_media_ended();
        assert_eq!(manager.transport(), Transport::Idle);
    }

    #[test]
    fn volume_is_clamped() {
        let mut manager = three_track_manager();
        manager.set_volume(150);
        assert_eq!(manager.volume(), 100);
    }

    #[test]
    fn seek_updates_elapsed_and_media() {
        let media = RecordingMedia::default();
        let mut manager = SessionManager::with_catalog(
            SessionConfig::default(),
            vec![track(1, "A")],
            Box::new(media.clone()),
        );
        manager.set_current_track(track(1, "A"));
        manager.seek(95.5);

        assert_eq!(manager.elapsed_secs(), 95.5);
        assert!(media.commands().contains(&MediaCommand::Seek(95.5)));
    }

    #[test]
    fn favorites_are_idempotent_through_manager() {
        let mut manager = three_track_manager();
        assert!(manager.add_to_favorites(track(1, "A")));
        assert!(!manager.add_to_favorites(track(1, "A")));
        assert_eq!(manager.favorites().len(), 1);

        manager.remove_from_favorites(1);
        assert!(manager.favorites().is_empty());
    }

    #[test]
    fn download_requires_reference() {
        let mut manager = three_track_manager();

        let mut downloadable = track(1, "A");
        downloadable.download_url = Some("https://cdn.example.com/1.mp3".to_string());
        assert!(manager.download_track(&downloadable));

        let plain = track(2, "B");
        assert!(!manager.download_track(&plain));

        let events = manager.take_events();
        assert_eq!(
            events,
            vec![SessionEvent::DownloadRequested {
                track_id: 1,
                url: "https://cdn.example.com/1.mp3".to_string(),
            }]
        );
    }

    #[test]
    fn add_story_prepends_newest_first() {
        let mut manager = SessionManager::default();
        let before = manager.stories().len();

        let id = manager.add_story("New Story", "Me", "Body", "Inspiration", StoryMode::Read, None);

        assert_eq!(manager.stories().len(), before + 1);
        assert_eq!(manager.stories()[0].id, id);
    }

    #[test]
    fn rapid_stories_get_unique_ids() {
        let mut manager = SessionManager::default();

        // Fast enough that several land in the same millisecond
        let ids: Vec<i64> = (0..5)
            .map(|i| {
                manager.add_story(
                    format!("Story {i}"),
                    "Me",
                    "Body",
                    "Inspiration",
                    StoryMode::Read,
                    None,
                )
            })
            .collect();

        let mut deduped = ids.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn catalog_refresh_emits_update() {
        let mut manager = three_track_manager();
        manager.take_events();

        let ticket = manager.begin_catalog_refresh();
        let applied = manager.complete_catalog_refresh(
            ticket,
            vec![SongRecord {
                id: 1,
                title: "Remote".to_string(),
                artist: "R".to_string(),
                url: "u".to_string(),
                genre: None,
                mood: None,
                cover_image: None,
            }],
        );

        assert!(applied);
        assert_eq!(manager.tracks().len(), 4);
        assert_eq!(manager.take_events(), vec![SessionEvent::CatalogUpdated { length: 4 }]);
    }

    #[test]
    fn failed_refresh_leaves_catalog() {
        let mut manager = three_track_manager();
        let ticket = manager.begin_catalog_refresh();
        manager.fail_catalog_refresh(ticket, &TuneboxError::network("connection refused"));

        assert_eq!(manager.tracks().len(), 3);
        assert!(manager.take_events().is_empty());
    }

    #[test]
    fn profile_snapshot_reflects_state() {
        let mut manager = three_track_manager();
        manager.add_to_history(track(1, "A"));
        manager.add_to_favorites(track(2, "B"));

        let profile = manager.user_profile();
        assert_eq!(profile.listening_history.len(), 1);
        assert_eq!(profile.favorites.len(), 1);
        assert!(profile.uploaded_songs.is_empty());
        assert_eq!(profile.joined_at, manager.joined_at());
    }
}
