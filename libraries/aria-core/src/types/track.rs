//! Track domain types
use crate::types::{AlbumId, TrackId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Full track as returned by `GET /api/v1/tracks/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// URL slug
    pub slug: String,

    /// Position within the album
    pub track_number: u32,

    /// Track length in seconds
    pub duration_seconds: u32,

    /// Album the track belongs to
    pub album_id: AlbumId,

    /// Storage key of the audio file (not a playable URL)
    pub file_key: String,

    /// When the track was added to the catalog
    pub created_at: DateTime<Utc>,
}

impl Track {
    /// Create a track with minimal metadata (mostly useful in tests)
    pub fn new(id: TrackId, title: impl Into<String>, track_number: u32) -> Self {
        let title = title.into();
        let slug = title.to_lowercase().replace(' ', "-");
        Self {
            id,
            title,
            slug,
            track_number,
            duration_seconds: 0,
            album_id: AlbumId::new("unknown"),
            file_key: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Get the track length as a `Duration`
    pub fn duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.duration_seconds))
    }
}

/// Minimal track shape embedded inside album and playlist responses.
///
/// Does not carry `file_key` or any streamable reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackSummary {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// URL slug
    pub slug: String,

    /// Position within the album
    pub track_number: u32,

    /// Track length in seconds
    pub duration_seconds: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_creation() {
        let track = Track::new(TrackId::new("trk-1"), "Night Drive", 3);
        assert_eq!(track.title, "Night Drive");
        assert_eq!(track.slug, "night-drive");
        assert_eq!(track.track_number, 3);
    }

    #[test]
    fn duration_conversion() {
        let mut track = Track::new(TrackId::new("trk-1"), "Song", 1);
        track.duration_seconds = 245;
        assert_eq!(track.duration(), Duration::from_secs(245));
    }

    #[test]
    fn deserializes_wire_format() {
        let json = r#"{
            "id": "trk-9",
            "title": "Aurora",
            "slug": "aurora",
            "track_number": 2,
            "duration_seconds": 198,
            "album_id": "alb-4",
            "file_key": "audio/alb-4/02-aurora.flac",
            "created_at": "2024-03-01T12:00:00Z"
        }"#;

        let track: Track = serde_json::from_str(json).unwrap();
        assert_eq!(track.id, TrackId::new("trk-9"));
        assert_eq!(track.duration_seconds, 198);
        assert_eq!(track.file_key, "audio/alb-4/02-aurora.flac");
    }
}
