//! Hand-authored seed catalog
//!
//! Fixed bootstrap data used before any remote rows arrive. Seed entries are
//! immutable and always come first in the merged catalog, in this order.

use crate::types::{Story, StoryMode, Track};
use chrono::{Duration, Utc};

struct SeedTrack {
    id: i64,
    title: &'static str,
    artist: &'static str,
    cover: &'static str,
    url: &'static str,
    duration: &'static str,
    genre: &'static str,
    mood: &'static str,
    category: &'static str,
}

const SEED_TRACKS: &[SeedTrack] = &[
    SeedTrack {
        id: 1,
        title: "Dreams",
        artist: "Luna Shadows",
        cover: "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=400&h=400&fit=crop&crop=center",
        url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-1.mp3",
        duration: "3:45",
        genre: "Pop",
        mood: "Dreamy",
        category: "Trending",
    },
    SeedTrack {
        id: 2,
        title: "Echoes",
        artist: "Apollo",
        cover: "https://images.unsplash.com/photo-1514320291840-2e0a9bf2a9ae?w=400&h=400&fit=crop&crop=center",
        url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-2.mp3",
        duration: "4:12",
        genre: "Electronic",
        mood: "Calm",
        category: "Chill",
    },
    SeedTrack {
        id: 3,
        title: "Neon Nights",
        artist: "Synthwave",
        cover: "https://images.unsplash.com/photo-1470225620780-dba8ba36b745?w=400&h=400&fit=crop&crop=center",
        url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-3.mp3",
        duration: "3:28",
        genre: "Electronic",
        mood: "Energetic",
        category: "Trending",
    },
    SeedTrack {
        id: 4,
        title: "Cosmic Journey",
        artist: "Stellar Beats",
        cover: "https://images.unsplash.com/photo-1459749411175-04bf5292ceea?w=400&h=400&fit=crop&crop=center",
        url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-4.mp3",
        duration: "5:03",
        genre: "EDM",
        mood: "Uplifting",
        category: "Workout",
    },
    SeedTrack {
        id: 5,
        title: "Ocean Waves",
        artist: "Deep Blue",
        cover: "https://images.unsplash.com/photo-1544947950-fa07a98d237f?w=400&h=400&fit=crop&crop=center",
        url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-5.mp3",
        duration: "4:33",
        genre: "Classical",
        mood: "Peaceful",
        category: "Chill",
    },
    SeedTrack {
        id: 6,
        title: "Electric Storm",
        artist: "Thunder Collective",
        cover: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=400&h=400&fit=crop&crop=center",
        url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-6.mp3",
        duration: "3:57",
        genre: "Rock",
        mood: "Aggressive",
        category: "Workout",
    },
    SeedTrack {
        id: 7,
        title: "Midnight Drive",
        artist: "Neon City",
        cover: "https://images.unsplash.com/photo-1518837695005-2083093ee35b?w=400&h=400&fit=crop&crop=center",
        url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-7.mp3",
        duration: "4:21",
        genre: "Electronic",
        mood: "Nostalgic",
        category: "Night",
    },
    SeedTrack {
        id: 8,
        title: "Starlight",
        artist: "Cosmic Dreams",
        cover: "https://images.unsplash.com/photo-1446776653964-20c1d3a81b06?w=400&h=400&fit=crop&crop=center",
        url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-8.mp3",
        duration: "3:16",
        genre: "Pop",
        mood: "Romantic",
        category: "Night",
    },
    SeedTrack {
        id: 9,
        title: "City Lights",
        artist: "Urban Pulse",
        cover: "https://images.unsplash.com/photo-1514525253161-7a46d19cd819?w=400&h=400&fit=crop&crop=center",
        url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-9.mp3",
        duration: "4:44",
        genre: "Hip Hop",
        mood: "Energetic",
        category: "Trending",
    },
    SeedTrack {
        id: 10,
        title: "Digital Love",
        artist: "Cyber Hearts",
        cover: "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=400&h=400&fit=crop&crop=center",
        url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-10.mp3",
        duration: "3:39",
        genre: "Electronic",
        mood: "Happy",
        category: "Chill",
    },
    SeedTrack {
        id: 11,
        title: "Sunset Boulevard",
        artist: "Golden Hour",
        cover: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=400&h=400&fit=crop&crop=center",
        url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-11.mp3",
        duration: "4:18",
        genre: "Jazz",
        mood: "Calm",
        category: "Chill",
    },
    SeedTrack {
        id: 12,
        title: "Rhythm & Soul",
        artist: "Groove Masters",
        cover: "https://images.unsplash.com/photo-1470225620780-dba8ba36b745?w=400&h=400&fit=crop&crop=center",
        url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-12.mp3",
        duration: "3:52",
        genre: "R&B",
        mood: "Fun",
        category: "Trending",
    },
];

/// Build the seed catalog.
///
/// Seed tracks are downloadable; the download reference is the media URL.
pub fn seed_tracks() -> Vec<Track> {
    SEED_TRACKS
        .iter()
        .map(|s| Track {
            id: s.id,
            title: s.title.to_string(),
            artist: s.artist.to_string(),
            cover: s.cover.to_string(),
            url: s.url.to_string(),
            duration: Some(s.duration.to_string()),
            genre: s.genre.to_string(),
            mood: s.mood.to_string(),
            category: s.category.to_string(),
            download_url: Some(s.url.to_string()),
        })
        .collect()
}

/// Build the seed story feed, newest first.
pub fn seed_stories() -> Vec<Story> {
    let now = Utc::now();
    vec![
        Story {
            id: 1,
            title: "My Musical Journey".to_string(),
            author: "You".to_string(),
            content: "Started my music collection with these amazing tracks. The sound quality \
                      and variety keep me coming back for more!"
                .to_string(),
            timestamp: now,
            genre: "Inspiration".to_string(),
            mode: StoryMode::Read,
            audio_url: None,
        },
        Story {
            id: 2,
            title: "Discovering New Beats".to_string(),
            author: "Music Lover".to_string(),
            content: "Found some incredible synthwave tracks today. The atmospheric sounds \
                      transport you to another dimension."
                .to_string(),
            timestamp: now - Duration::hours(1),
            genre: "Motivation".to_string(),
            mode: StoryMode::Read,
            audio_url: None,
        },
        Story {
            id: 3,
            title: "Until the Rain Stops".to_string(),
            author: "Wilx Team".to_string(),
            content: "She waited under the old bus shelter, counting the drops that slid off the \
                      tin roof, promising herself she would only stay until the rain stops."
                .to_string(),
            timestamp: now - Duration::hours(5),
            genre: "Lonely".to_string(),
            mode: StoryMode::Listen,
            audio_url: Some(
                "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-1.mp3".to_string(),
            ),
        },
        Story {
            id: 4,
            title: "Through the Broken Glass".to_string(),
            author: "Wilx Team".to_string(),
            content: "The record player still worked, even after the window shattered. Some songs \
                      survive anything."
                .to_string(),
            timestamp: now - Duration::hours(8),
            genre: "Teen Drama".to_string(),
            mode: StoryMode::Read,
            audio_url: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_ids_are_unique() {
        let tracks = seed_tracks();
        let ids: HashSet<i64> = tracks.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), tracks.len());
    }

    #[test]
    fn seed_catalog_is_populated() {
        let tracks = seed_tracks();
        assert_eq!(tracks.len(), 12);
        assert!(tracks.iter().all(|t| !t.title.is_empty()));
        assert!(tracks.iter().all(|t| t.duration.is_some()));
        assert!(tracks.iter().all(|t| t.download_url.is_some()));
    }

    #[test]
    fn seed_stories_listen_mode_has_audio() {
        for story in seed_stories() {
            match story.mode {
                StoryMode::Listen => assert!(story.audio_url.is_some()),
                StoryMode::Read => assert!(story.audio_url.is_none()),
            }
        }
    }
}
