//! TuneBox - Session State Management
//!
//! Single authoritative owner of playback, catalog, history, and favorites
//! for the TuneBox front-end.
//!
//! This crate provides:
//! - Transport state machine (idle / paused / playing) with wrap-around
//!   next/previous navigation
//! - The merged track catalog (seed data + remotely fetched rows) with
//!   case-insensitive query operations
//! - Listening history (move-to-front, capped at 50)
//! - Favorites (idempotent by id)
//! - The story feed and per-session user profile
//! - A single-flight catalog refresh protocol and async sync glue
//!
//! # Architecture
//!
//! The manager is platform-agnostic: the platform media resource is driven
//! through the [`MediaElement`] trait, and the storage collaborator through
//! `tunebox_core::SongStore`. The view layer reads state via accessors,
//! requests mutations via operations, and drains [`SessionEvent`]s to
//! re-render.
//!
//! # Example
//!
//! ```rust
//! use tunebox_session::{SessionConfig, SessionManager};
//!
//! let mut manager = SessionManager::detached(SessionConfig::default());
//!
//! let first = manager.tracks()[0].clone();
//! manager.set_current_track(first);
//! manager.set_playing(true);
//! manager.play_next();
//!
//! assert!(manager.is_playing());
//! assert_eq!(manager.history().len(), 1);
//! ```

mod catalog;
mod error;
mod events;
mod favorites;
mod history;
mod manager;
mod media;
mod sync;
pub mod types;

// Public exports
pub use catalog::{
    normalize_song, Catalog, RefreshTicket, PLACEHOLDER_COVER, PLACEHOLDER_DURATION,
    REMOTE_ID_BASE, UNKNOWN_TAG,
};
pub use error::{Result, SessionError};
pub use events::SessionEvent;
pub use favorites::Favorites;
pub use history::ListeningHistory;
pub use manager::SessionManager;
pub use media::{MediaElement, NoopMedia};
pub use sync::CatalogSync;
pub use types::{SessionConfig, Transport};
