//! Playback lifecycle events
//!
//! Complements the snapshot channel: snapshots say what the state *is*,
//! events say what just *happened*. Delivered via `tokio::sync::broadcast`,
//! so slow subscribers can miss events but never block the session.

use aria_core::TrackId;
use serde::{Deserialize, Serialize};

/// Something notable happened inside the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// A track finished loading and playback began
    TrackStarted {
        /// The track that started
        track: TrackId,
    },

    /// A track played through to its natural end
    TrackFinished {
        /// The track that finished
        track: TrackId,
    },

    /// A track could not be played and was skipped
    PlaybackFailed {
        /// The track that failed
        track: TrackId,
        /// Rendered failure cause
        error: String,
    },

    /// The queue ran out with repeat off; the session is paused at the end
    QueueEnded,
}
