//! Client configuration.

use serde::{Deserialize, Serialize};

/// Connection settings for an [`crate::AriaClient`].
///
/// Serializable so callers can persist it alongside their other settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the Aria server, e.g. `https://aria.example.com`
    pub base_url: String,

    /// Bearer token from a previous login, if any
    pub access_token: Option<String>,
}

impl ClientConfig {
    /// Create a configuration with no stored token
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: None,
        }
    }

    /// Attach a stored access token
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }
}
