//! API envelope and cross-cutting response types
use crate::types::{Album, Artist, TrackId, TrackSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pagination metadata attached to list responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMeta {
    /// Current page (1-based)
    pub page: u32,

    /// Total number of items across all pages
    pub total: u64,
}

/// Uniform response envelope used by every Aria endpoint.
///
/// Exactly one of `data` or `error` is populated; `meta` accompanies
/// paginated list responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Payload on success
    pub data: Option<T>,

    /// Human-readable error on failure
    pub error: Option<String>,

    /// Pagination info for list endpoints
    pub meta: Option<ApiMeta>,
}

/// Combined results from `GET /api/v1/search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    /// Matching artists
    pub artists: Vec<Artist>,

    /// Matching albums
    pub albums: Vec<Album>,

    /// Matching tracks
    pub tracks: Vec<TrackSummary>,
}

/// Response from `GET /api/v1/tracks/{id}/stream-url`.
///
/// The URL is time-limited; callers should resolve it immediately before
/// starting playback rather than caching it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamUrlResponse {
    /// Playable URL for the track's audio
    pub url: String,
}

/// Request body for `POST /api/v1/listens`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordListenRequest {
    /// The track that was listened to
    pub track_id: TrackId,
}

/// One entry of the user's listen history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListenHistoryEntry {
    /// Entry identifier
    pub id: String,

    /// The listened track
    pub track: TrackSummary,

    /// When the listen happened
    pub listened_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_decodes_success() {
        let json = r#"{"data": {"url": "https://cdn.example.com/t.m4a"}, "error": null, "meta": null}"#;
        let env: ApiResponse<StreamUrlResponse> = serde_json::from_str(json).unwrap();
        assert_eq!(env.data.unwrap().url, "https://cdn.example.com/t.m4a");
        assert!(env.error.is_none());
    }

    #[test]
    fn envelope_decodes_error() {
        let json = r#"{"data": null, "error": "track not found", "meta": null}"#;
        let env: ApiResponse<StreamUrlResponse> = serde_json::from_str(json).unwrap();
        assert!(env.data.is_none());
        assert_eq!(env.error.as_deref(), Some("track not found"));
    }

    #[test]
    fn envelope_carries_pagination() {
        let json = r#"{"data": [], "error": null, "meta": {"page": 2, "total": 51}}"#;
        let env: ApiResponse<Vec<Artist>> = serde_json::from_str(json).unwrap();
        let meta = env.meta.unwrap();
        assert_eq!(meta.page, 2);
        assert_eq!(meta.total, 51);
    }
}
