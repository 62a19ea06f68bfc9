//! Public error types for the preference service module.
//!
//! These errors are safe to expose to other modules and consumers.

use thiserror::Error;

/// Errors that can be returned by the `PreferencesApi`.
#[derive(Error, Debug, Clone)]
pub enum PreferenceError {
    /// The referenced owner does not exist in the user graph.
    #[error("User '{login}' does not exist")]
    UnknownUser { login: String },

    /// The instance is already claimed by a different owner.
    #[error("Preference '{instance}' is already defined by another user")]
    OwnershipConflict { instance: String },

    /// The named preference group does not exist.
    #[error("Preference group '{group}' does not exist")]
    GroupNotFound { group: String },

    /// A write request must carry exactly one preference entry.
    #[error("Preference '{group}' must carry exactly one entry, got {count}")]
    InvalidRequestShape { group: String, count: usize },

    /// The stored value could not be decoded for the requested shape.
    #[error("Mal-formed preference value ({field})")]
    MalformedPreference { field: String },

    /// Validation error with the provided data.
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// An internal error occurred.
    #[error("Internal error")]
    Internal,
}

impl PreferenceError {
    /// Create an `UnknownUser` error.
    pub fn unknown_user(login: impl Into<String>) -> Self {
        Self::UnknownUser {
            login: login.into(),
        }
    }

    /// Create an `OwnershipConflict` error.
    pub fn ownership_conflict(instance: impl Into<String>) -> Self {
        Self::OwnershipConflict {
            instance: instance.into(),
        }
    }

    /// Create a `GroupNotFound` error.
    pub fn group_not_found(group: impl Into<String>) -> Self {
        Self::GroupNotFound {
            group: group.into(),
        }
    }

    /// Create an `InvalidRequestShape` error.
    pub fn invalid_request_shape(group: impl Into<String>, count: usize) -> Self {
        Self::InvalidRequestShape {
            group: group.into(),
            count,
        }
    }

    /// Create a `MalformedPreference` error.
    pub fn malformed_preference(field: impl Into<String>) -> Self {
        Self::MalformedPreference {
            field: field.into(),
        }
    }

    /// Create a `Validation` error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an `Internal` error.
    #[must_use]
    pub fn internal() -> Self {
        Self::Internal
    }
}
