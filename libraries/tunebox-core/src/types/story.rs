/// Story domain type
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a story is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryMode {
    /// Text-only story
    Read,

    /// Story with an attached audio narration
    Listen,
}

/// A narrative post in the story feed.
///
/// Seed stories are immutable constants; user stories get a
/// timestamp-derived id and are prepended to the feed (newest first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    /// Story identifier (timestamp-derived for user stories)
    pub id: i64,

    /// Story title
    pub title: String,

    /// Author display name
    pub author: String,

    /// Body text
    pub content: String,

    /// Creation time
    pub timestamp: DateTime<Utc>,

    /// Genre tag, e.g. "Inspiration", "Folktales"
    pub genre: String,

    /// Read or listen mode
    pub mode: StoryMode,

    /// Audio reference, present only when `mode == Listen`
    pub audio_url: Option<String>,
}

impl Story {
    /// Create a new user story with a timestamp-derived id.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        content: impl Into<String>,
        genre: impl Into<String>,
        mode: StoryMode,
        audio_url: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: now.timestamp_millis(),
            title: title.into(),
            author: author.into(),
            content: content.into(),
            timestamp: now,
            genre: genre.into(),
            mode,
            audio_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_story_id_is_timestamp_derived() {
        let story = Story::new("Title", "Author", "Body", "Inspiration", StoryMode::Read, None);
        assert_eq!(story.id, story.timestamp.timestamp_millis());
        assert!(story.audio_url.is_none());
    }

    #[test]
    fn listen_story_carries_audio() {
        let story = Story::new(
            "Title",
            "Author",
            "Body",
            "Folktales",
            StoryMode::Listen,
            Some("https://cdn.example.com/story.mp3".to_string()),
        );
        assert_eq!(story.mode, StoryMode::Listen);
        assert!(story.audio_url.is_some());
    }
}
