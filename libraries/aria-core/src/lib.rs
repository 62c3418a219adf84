//! Aria Player Core
//!
//! Domain types shared by all Aria client crates.
//!
//! The Aria backend speaks snake_case JSON wrapped in a uniform envelope
//! (`{ data, error, meta }`), so the Rust field names here match the wire
//! directly and no `serde` renames are needed.
//!
//! # Example
//!
//! ```rust
//! use aria_core::types::{Track, TrackId};
//!
//! let track = Track::new(TrackId::new("trk-1"), "Night Drive", 3);
//! assert_eq!(track.track_number, 3);
//! ```

#![forbid(unsafe_code)]

pub mod types;

// Re-export commonly used types
pub use types::{
    // Envelope
    ApiMeta, ApiResponse,
    // Identity
    AlbumId, ArtistId, PlaylistId, TrackId, UserId,
    // Catalog
    Album, Artist, Playlist, PlaylistTrackEntry, SearchResults, Track, TrackSummary,
    // Streaming and history
    ListenHistoryEntry, RecordListenRequest, StreamUrlResponse,
    // Auth
    AuthSession, LoginCredentials, RegisterCredentials, TokenResponse, User,
};
