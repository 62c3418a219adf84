//! Stream URL resolution

use aria_core::TrackId;
use async_trait::async_trait;
use thiserror::Error;

/// Why a stream URL could not be produced
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The track exists but has no playable stream (or does not exist)
    #[error("no playable stream available")]
    NotAvailable,

    /// The resolver could not be reached
    #[error("stream resolution transport error: {0}")]
    Transport(String),
}

/// Turns a track ID into a playable URL.
///
/// URLs are time-limited; the session resolves immediately before each load
/// and never caches the result.
#[async_trait]
pub trait StreamResolver: Send + Sync {
    /// Resolve a fresh stream URL for `track`
    async fn resolve_stream_url(&self, track: &TrackId) -> Result<String, ResolveError>;
}
