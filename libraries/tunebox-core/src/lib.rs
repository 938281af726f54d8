//! TuneBox Core
//!
//! Domain types, capability traits, and error handling shared across the
//! TuneBox crates.
//!
//! This crate defines:
//! - **Domain Types**: `Track`, `Story`, `UserProfile`, `User`, and the wire
//!   records of the song-storage collaborator
//! - **Capability Traits**: `SongStore`
//! - **Error Handling**: unified `TuneboxError` and `Result`
//! - **Seed Data**: the hand-authored bootstrap catalog and story feed
//!
//! # Example
//!
//! ```rust
//! use tunebox_core::types::User;
//! use tunebox_core::seed;
//!
//! let user = User::new("Alice", "alice@example.com");
//! let catalog = seed::seed_tracks();
//! assert!(!catalog.is_empty());
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod seed;
pub mod traits;
pub mod types;

// Re-export commonly used items
pub use error::{Result, TuneboxError};
pub use traits::SongStore;
pub use types::{NewSongRecord, SongRecord, Story, StoryMode, Track, User, UserProfile};
