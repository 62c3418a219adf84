//! Listen history reporting

use aria_core::TrackId;
use async_trait::async_trait;
use thiserror::Error;

/// A listen report could not be delivered
#[derive(Debug, Error)]
#[error("listen report failed: {0}")]
pub struct RecordError(pub String);

/// Sink for "this track was listened to" notifications.
///
/// The session fires these when a track plays to its natural end, without
/// awaiting the outcome; a failed report is logged and dropped, never
/// retried, and never affects playback.
#[async_trait]
pub trait HistoryRecorder: Send + Sync {
    /// Record that `track` was listened to
    async fn record_listen(&self, track: &TrackId) -> Result<(), RecordError>;
}
