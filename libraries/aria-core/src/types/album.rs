//! Album domain type
use crate::types::{AlbumId, ArtistId, TrackSummary};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Album as returned by `GET /api/v1/albums` (list) and
/// `GET /api/v1/albums/{id}` (detail, includes tracks)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    /// Unique album identifier
    pub id: AlbumId,

    /// Album title
    pub title: String,

    /// URL slug
    pub slug: String,

    /// Artist the album belongs to
    pub artist_id: ArtistId,

    /// Cover image URL (if any)
    pub cover_image_url: Option<String>,

    /// Release date (if known)
    pub release_date: Option<NaiveDate>,

    /// Tracks, present only in the detail response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracks: Option<Vec<TrackSummary>>,

    /// When the album was added to the catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
