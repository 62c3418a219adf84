//! Authentication wire types
use crate::types::User;
use serde::{Deserialize, Serialize};

/// Bearer token issued by `POST /api/v1/auth/login`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Opaque access token
    pub access_token: String,

    /// Token scheme, always `"bearer"`
    pub token_type: String,
}

/// Request body for `POST /api/v1/auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
    /// Account email address
    pub email: String,

    /// Account password
    pub password: String,
}

/// Request body for `POST /api/v1/auth/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterCredentials {
    /// Account email address
    pub email: String,

    /// Account password
    pub password: String,

    /// Optional display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Successful login/register payload: the user plus their tokens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    /// The authenticated user
    pub user: User,

    /// Issued tokens
    pub tokens: TokenResponse,
}
