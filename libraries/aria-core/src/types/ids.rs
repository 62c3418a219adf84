//! ID types for Aria entities
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an ID from an existing string
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a new random ID
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Get the inner string
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

entity_id!(
    /// Track identifier
    TrackId
);
entity_id!(
    /// Album identifier
    AlbumId
);
entity_id!(
    /// Artist identifier
    ArtistId
);
entity_id!(
    /// Playlist identifier
    PlaylistId
);
entity_id!(
    /// User identifier
    UserId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_creates_unique_ids() {
        let id1 = TrackId::generate();
        let id2 = TrackId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn track_id_from_string() {
        let id = TrackId::new("trk-123");
        assert_eq!(id.as_str(), "trk-123");
    }

    #[test]
    fn display_uses_inner_string() {
        let id = AlbumId::new("alb-456");
        assert_eq!(format!("{}", id), "alb-456");
    }

    #[test]
    fn serde_is_transparent() {
        let id = ArtistId::new("art-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"art-1\"");

        let back: ArtistId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
