//! Artist domain type
use crate::types::{Album, ArtistId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Artist as returned by `GET /api/v1/artists` (list, no bio) and
/// `GET /api/v1/artists/{slug}` (detail, includes bio and albums)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    /// Unique artist identifier
    pub id: ArtistId,

    /// Artist name
    pub name: String,

    /// URL slug
    pub slug: String,

    /// Biography, present only in the detail response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    /// Artist image URL (if any)
    pub image_url: Option<String>,

    /// Albums, present only in the detail response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub albums: Option<Vec<Album>>,

    /// When the artist was added to the catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
