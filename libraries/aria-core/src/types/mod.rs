//! Domain types for the Aria Player client

mod album;
mod api;
mod artist;
mod auth;
mod ids;
mod playlist;
mod track;
mod user;

pub use album::Album;
pub use api::{
    ApiMeta, ApiResponse, ListenHistoryEntry, RecordListenRequest, SearchResults,
    StreamUrlResponse,
};
pub use artist::Artist;
pub use auth::{AuthSession, LoginCredentials, RegisterCredentials, TokenResponse};
pub use ids::{AlbumId, ArtistId, PlaylistId, TrackId, UserId};
pub use playlist::{Playlist, PlaylistTrackEntry};
pub use track::{Track, TrackSummary};
pub use user::User;
