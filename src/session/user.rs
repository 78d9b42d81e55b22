//! User records and the public profile projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user, including the login credential.
///
/// This record never leaves the session store. Everything outside the
/// session boundary sees a [`UserProfile`] instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier, immutable once assigned.
    pub id: String,
    pub name: String,
    /// Unique across the user set, compared case-insensitively.
    pub email: String,
    pub password: String,
    /// Gates UI visibility of moderation screens and skips the
    /// moderation queue for new items.
    pub is_admin: bool,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Public projection of a [`User`] with the credential stripped.
///
/// This is the shape held as the active session and written to the
/// persisted session slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a fresh non-admin user, stamped to now.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
            password: password.into(),
            is_admin: false,
            avatar: None,
            created_at: Utc::now(),
        }
    }

    /// Project this record into its public shape.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            is_admin: self.is_admin,
            avatar: self.avatar.clone(),
            created_at: self.created_at,
        }
    }
}
