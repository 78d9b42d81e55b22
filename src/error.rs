//! Error types for store operations.
//!
//! This module defines [`CampusfindError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `CampusfindError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `CampusfindError::Other`) for unexpected errors
//! - All errors should provide messages the UI can surface verbatim

use thiserror::Error;

use crate::items::ItemStatus;

/// Core error type for store operations.
#[derive(Debug, Error)]
pub enum CampusfindError {
    /// Login lookup failed: wrong email or password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Registration attempted with an email that is already taken.
    #[error("Email already in use: {email}")]
    EmailInUse { email: String },

    /// Item creation attempted with no active session.
    #[error("You must be logged in to post an item")]
    NotAuthenticated,

    /// No item with the given id.
    #[error("No item with id '{id}'")]
    ItemNotFound { id: String },

    /// No registered user with the given id.
    #[error("No user with id '{id}'")]
    UserNotFound { id: String },

    /// The status lifecycle does not permit this move.
    #[error("Cannot move an item from '{from}' to '{to}'")]
    InvalidTransition { from: ItemStatus, to: ItemStatus },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A snapshot could not be serialized or parsed.
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, CampusfindError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_credentials_message_is_user_facing() {
        let err = CampusfindError::InvalidCredentials;
        assert_eq!(err.to_string(), "Invalid email or password");
    }

    #[test]
    fn email_in_use_displays_email() {
        let err = CampusfindError::EmailInUse {
            email: "taken@campus.edu".into(),
        };
        assert!(err.to_string().contains("taken@campus.edu"));
    }

    #[test]
    fn not_authenticated_message_is_user_facing() {
        let err = CampusfindError::NotAuthenticated;
        assert!(err.to_string().contains("logged in"));
    }

    #[test]
    fn item_not_found_displays_id() {
        let err = CampusfindError::ItemNotFound { id: "42".into() };
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn user_not_found_displays_id() {
        let err = CampusfindError::UserNotFound { id: "7".into() };
        assert!(err.to_string().contains("7"));
    }

    #[test]
    fn invalid_transition_displays_both_statuses() {
        let err = CampusfindError::InvalidTransition {
            from: ItemStatus::Resolved,
            to: ItemStatus::Approved,
        };
        let msg = err.to_string();
        assert!(msg.contains("resolved"));
        assert!(msg.contains("approved"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: CampusfindError = io_err.into();
        assert!(matches!(err, CampusfindError::Io(_)));
    }

    #[test]
    fn snapshot_error_converts_from_serde_json() {
        let parse_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: CampusfindError = parse_err.into();
        assert!(matches!(err, CampusfindError::Snapshot(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(CampusfindError::InvalidCredentials)
        }
        assert!(returns_error().is_err());
    }
}
