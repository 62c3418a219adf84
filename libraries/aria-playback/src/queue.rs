//! Play queue

use aria_core::TrackId;
use serde::{Deserialize, Serialize};

use crate::types::QueuedTrack;

/// Ordered list of tracks the session plays through.
///
/// The queue itself is dumb storage; ordering policy (repeat, shuffle) lives
/// with the session. Duplicate track IDs are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayQueue {
    tracks: Vec<QueuedTrack>,
}

impl PlayQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a queue from an ordered track list
    pub fn from_tracks(tracks: Vec<QueuedTrack>) -> Self {
        Self { tracks }
    }

    /// Create a queue holding a single track
    pub fn singleton(track: QueuedTrack) -> Self {
        Self { tracks: vec![track] }
    }

    /// Index of the first entry with the given ID
    pub fn position_of(&self, id: &TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| &t.id == id)
    }

    /// Entry at `index`, if in bounds
    pub fn get(&self, index: usize) -> Option<&QueuedTrack> {
        self.tracks.get(index)
    }

    /// Append a track to the end
    pub fn push(&mut self, track: QueuedTrack) {
        self.tracks.push(track);
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the queue holds no entries
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// All entries in order
    pub fn tracks(&self) -> &[QueuedTrack] {
        &self.tracks
    }
}
