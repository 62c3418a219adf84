//! Catalog browsing endpoints.

use aria_core::{Album, AlbumId, Artist, Playlist, PlaylistId, SearchResults, Track, TrackId};

use crate::client::AriaClient;
use crate::error::Result;

impl AriaClient {
    /// List artists (no bio in the list shape).
    pub async fn artists(&self, page: Option<u32>) -> Result<Vec<Artist>> {
        self.get_paged("/api/v1/artists", page).await
    }

    /// Fetch one artist by slug, including bio and albums.
    pub async fn artist(&self, slug: &str) -> Result<Artist> {
        self.get(&format!("/api/v1/artists/{slug}")).await
    }

    /// List albums.
    pub async fn albums(&self, page: Option<u32>) -> Result<Vec<Album>> {
        self.get_paged("/api/v1/albums", page).await
    }

    /// Fetch one album, including its track list.
    pub async fn album(&self, id: &AlbumId) -> Result<Album> {
        self.get(&format!("/api/v1/albums/{id}")).await
    }

    /// Fetch an album's tracks in full (streamable) form.
    pub async fn album_tracks(&self, id: &AlbumId) -> Result<Vec<Track>> {
        self.get(&format!("/api/v1/albums/{id}/tracks")).await
    }

    /// Fetch one track.
    pub async fn track(&self, id: &TrackId) -> Result<Track> {
        self.get(&format!("/api/v1/tracks/{id}")).await
    }

    /// List the user's playlists.
    pub async fn playlists(&self, page: Option<u32>) -> Result<Vec<Playlist>> {
        self.get_paged("/api/v1/playlists", page).await
    }

    /// Fetch one playlist, including its ordered entries.
    pub async fn playlist(&self, id: &PlaylistId) -> Result<Playlist> {
        self.get(&format!("/api/v1/playlists/{id}")).await
    }

    /// Search artists, albums, and tracks in one call.
    pub async fn search(&self, query: &str) -> Result<SearchResults> {
        self.get_with_query("/api/v1/search", &[("q", query.to_string())])
            .await
    }
}
