//! Streaming and listen-history endpoints, plus the playback trait
//! implementations that let an `Arc<AriaClient>` plug straight into a
//! `PlaybackSession`.

use async_trait::async_trait;

use aria_core::{ListenHistoryEntry, RecordListenRequest, StreamUrlResponse, TrackId};
use aria_playback::{HistoryRecorder, RecordError, ResolveError, StreamResolver};

use crate::client::AriaClient;
use crate::error::{ClientError, Result};

impl AriaClient {
    /// Fetch a fresh time-limited stream URL for a track.
    ///
    /// The URL expires; request it right before loading, never cache it.
    pub async fn stream_url(&self, id: &TrackId) -> Result<StreamUrlResponse> {
        self.get(&format!("/api/v1/tracks/{id}/stream-url")).await
    }

    /// Report that a track was listened to.
    pub async fn record_listen(&self, id: &TrackId) -> Result<ListenHistoryEntry> {
        self.post(
            "/api/v1/listens",
            &RecordListenRequest {
                track_id: id.clone(),
            },
        )
        .await
    }

    /// Fetch the user's listen history, most recent first.
    pub async fn listen_history(&self, page: Option<u32>) -> Result<Vec<ListenHistoryEntry>> {
        self.get_paged("/api/v1/listens", page).await
    }
}

#[async_trait]
impl StreamResolver for AriaClient {
    async fn resolve_stream_url(&self, track: &TrackId) -> std::result::Result<String, ResolveError> {
        match self.stream_url(track).await {
            Ok(response) => Ok(response.url),
            Err(ClientError::ServerError { status: 404, .. }) => Err(ResolveError::NotAvailable),
            Err(e) => Err(ResolveError::Transport(e.to_string())),
        }
    }
}

#[async_trait]
impl HistoryRecorder for AriaClient {
    async fn record_listen(&self, track: &TrackId) -> std::result::Result<(), RecordError> {
        AriaClient::record_listen(self, track)
            .await
            .map(|_| ())
            .map_err(|e| RecordError(e.to_string()))
    }
}
