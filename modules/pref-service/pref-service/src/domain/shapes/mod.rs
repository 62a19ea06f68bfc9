//! View-specific transformations between graph entities and the external
//! payload shapes.
//!
//! All three shapes share the same graph schema and differ only in how much
//! of the stored value they decode: the any shape passes it through
//! unchanged, the grid shape extracts the column and filter collections and
//! the form shape extracts the UDF field list.

pub mod any;
pub mod form;
pub mod grid;

use std::collections::HashMap;

use pref_service_sdk::models::UserDto;

use super::entities::{PreferenceInstance, User};

/// A write request reduced to the single entry the engine stores.
#[derive(Debug, Clone)]
pub struct SavedEntry {
    pub instance_name: String,
    pub owner: String,
    pub is_public: bool,
    pub description: String,
    /// Serialized document written to the instance's value field.
    pub payload: String,
}

/// Per-call memo for owner labels, keyed by user surrogate id so a user
/// appearing under several instances of one response is resolved once. The
/// table lives for a single mapping call and is discarded with it.
#[derive(Default)]
pub(crate) struct OwnerLabels {
    labels: HashMap<i64, String>,
}

impl OwnerLabels {
    pub(crate) fn resolve(&mut self, instance: &PreferenceInstance) -> String {
        match instance.owner.as_ref().and_then(|user| user.id) {
            Some(id) => self
                .labels
                .entry(id)
                .or_insert_with(|| instance.owner_login().to_owned())
                .clone(),
            None => instance.owner_login().to_owned(),
        }
    }
}

/// Map a user entity to its external representation.
#[must_use]
pub fn user_to_external(user: &User) -> UserDto {
    UserDto {
        id: user.id,
        user_id: user.user_id,
        login_name: user.login_name.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        phone: user.phone.clone(),
        email: user.email.clone(),
        active: user.active,
        administrator: user.administrator,
        internal: user.internal,
        joined_date: user.joined_date,
        time_zone: user.time_zone.clone(),
        modified_by: user.modified_by.clone(),
        modified_at: user.modified_at,
    }
}
