//! User domain type
use crate::types::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authenticated user account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Account email address
    pub email: String,

    /// Display name (optional)
    pub display_name: Option<String>,

    /// When the account was created
    pub created_at: DateTime<Utc>,
}
