//! Domain types for TuneBox

mod profile;
mod song;
mod story;
mod track;
mod user;

pub use profile::UserProfile;
pub use song::{NewSongRecord, SongRecord};
pub use story::{Story, StoryMode};
pub use track::Track;
pub use user::User;
