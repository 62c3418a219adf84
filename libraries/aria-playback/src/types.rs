//! Session state types

use std::time::Duration;

use aria_core::{Track, TrackId, TrackSummary};
use serde::{Deserialize, Serialize};

/// A track as it sits in the play queue.
///
/// Deliberately smaller than [`aria_core::Track`]: the session only needs
/// identity and display fields, everything else stays with the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedTrack {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Position within its album (1-based)
    pub track_number: u32,
}

impl QueuedTrack {
    /// Create a queued track from its parts
    pub fn new(id: impl Into<TrackId>, title: impl Into<String>, track_number: u32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            track_number,
        }
    }
}

impl From<&Track> for QueuedTrack {
    fn from(track: &Track) -> Self {
        Self {
            id: track.id.clone(),
            title: track.title.clone(),
            track_number: track.track_number,
        }
    }
}

impl From<&TrackSummary> for QueuedTrack {
    fn from(track: &TrackSummary) -> Self {
        Self {
            id: track.id.clone(),
            title: track.title.clone(),
            track_number: track.track_number,
        }
    }
}

/// Repeat behavior applied when a track finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepeatMode {
    /// Play through the queue once, then pause at the end
    #[default]
    None,

    /// Replay the current track indefinitely
    One,

    /// Wrap from the last queue entry back to the first
    All,
}

/// Tunables for a [`crate::PlaybackSession`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// `previous()` restarts the current track instead of going back when
    /// playback has progressed past this point
    pub restart_threshold: Duration,

    /// Repeat mode applied at construction and after `stop()`
    pub repeat: RepeatMode,

    /// Shuffle flag applied at construction and after `stop()`
    pub shuffle: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            restart_threshold: Duration::from_secs(3),
            repeat: RepeatMode::None,
            shuffle: false,
        }
    }
}

/// A point-in-time copy of the session state.
///
/// Published through the session's `watch` channel on every state change;
/// cheap enough to clone per update for queue sizes a human would build.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    /// Track currently loaded (or loading)
    pub current_track: Option<QueuedTrack>,

    /// The full play queue
    pub queue: Vec<QueuedTrack>,

    /// Index of `current_track` within `queue`
    pub current_index: usize,

    /// Whether audio is audibly progressing
    pub is_playing: bool,

    /// Whether a load is in flight
    pub is_loading: bool,

    /// Last reported playback position
    pub position: Duration,

    /// Duration of the current track as reported by the engine
    pub duration: Duration,

    /// Active repeat mode
    pub repeat_mode: RepeatMode,

    /// Whether shuffle is active
    pub is_shuffle: bool,
}
