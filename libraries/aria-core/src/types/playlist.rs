//! Playlist domain types
use crate::types::{PlaylistId, TrackSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Playlist as returned by `GET /api/v1/playlists/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist name
    pub name: String,

    /// Whether the playlist is visible to other users
    pub is_public: bool,

    /// Ordered entries, present only in the detail response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracks: Option<Vec<PlaylistTrackEntry>>,

    /// When the playlist was created
    pub created_at: DateTime<Utc>,
}

/// One positioned track inside a playlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistTrackEntry {
    /// Entry identifier (distinct from the track's own ID)
    pub id: String,

    /// The referenced track
    pub track: TrackSummary,

    /// Zero-based position within the playlist
    pub position: u32,
}
