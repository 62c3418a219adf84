//! Playback error types

use aria_core::TrackId;
use thiserror::Error;

use crate::engine::EngineError;
use crate::resolver::ResolveError;

/// Why a track could not be played.
///
/// None of these abort the session: resolution and load failures trigger an
/// automatic skip to the next track, transport failures are logged and the
/// optimistic state update stands.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// No playable URL could be obtained for a track
    #[error("stream resolution failed for track {track}: {source}")]
    Resolution {
        /// The track that could not be resolved
        track: TrackId,
        /// Underlying resolver failure
        source: ResolveError,
    },

    /// The audio engine rejected or failed to load a resolved stream
    #[error("engine load failed for track {track}: {source}")]
    EngineLoad {
        /// The track whose stream failed to load
        track: TrackId,
        /// Underlying engine failure
        source: EngineError,
    },

    /// A pause/resume/seek command was rejected by the engine
    #[error("transport command failed: {0}")]
    Transport(#[from] EngineError),
}
