use pref_service_sdk::PreferenceError;
use thiserror::Error;

/// Domain-specific errors for preference resolution.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("User '{login}' does not exist")]
    UnknownUser { login: String },

    #[error("Preference '{instance}' is already defined by another user")]
    OwnershipConflict { instance: String },

    #[error("Preference group '{group}' does not exist")]
    GroupNotFound { group: String },

    #[error("Preference '{group}' must carry exactly one entry, got {count}")]
    InvalidRequestShape { group: String, count: usize },

    #[error("Mal-formed preference value ({field})")]
    MalformedPreference { field: String },

    #[error("Validation failed: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Store error: {message}")]
    Store { message: String },
}

impl DomainError {
    pub fn unknown_user(login: impl Into<String>) -> Self {
        Self::UnknownUser {
            login: login.into(),
        }
    }

    pub fn ownership_conflict(instance: impl Into<String>) -> Self {
        Self::OwnershipConflict {
            instance: instance.into(),
        }
    }

    pub fn group_not_found(group: impl Into<String>) -> Self {
        Self::GroupNotFound {
            group: group.into(),
        }
    }

    pub fn invalid_request_shape(group: impl Into<String>, count: usize) -> Self {
        Self::InvalidRequestShape {
            group: group.into(),
            count,
        }
    }

    pub fn malformed(field: impl Into<String>) -> Self {
        Self::MalformedPreference {
            field: field.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }
}

/// Convert domain errors to SDK errors for public API consumption.
impl From<DomainError> for PreferenceError {
    fn from(domain_error: DomainError) -> Self {
        match domain_error {
            DomainError::UnknownUser { login } => PreferenceError::unknown_user(login),
            DomainError::OwnershipConflict { instance } => {
                PreferenceError::ownership_conflict(instance)
            }
            DomainError::GroupNotFound { group } => PreferenceError::group_not_found(group),
            DomainError::InvalidRequestShape { group, count } => {
                PreferenceError::invalid_request_shape(group, count)
            }
            DomainError::MalformedPreference { field } => {
                PreferenceError::malformed_preference(field)
            }
            DomainError::Validation { field, message } => {
                PreferenceError::validation(format!("{}: {}", field, message))
            }
            DomainError::Store { .. } => PreferenceError::internal(),
        }
    }
}
