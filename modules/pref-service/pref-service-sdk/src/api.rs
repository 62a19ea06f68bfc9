//! `PreferencesApi` trait definition.
//!
//! This trait defines the public API for the preference module. It is what
//! a request-handling layer consumes; all operations are plain
//! request/response and the results are transport-agnostic models.

use async_trait::async_trait;

use crate::errors::PreferenceError;
use crate::models::{
    AnyPreferenceEntry, FormPreference, FormPreferenceEntry, GridPreference, GridPreferenceEntry,
    UserDto,
};

/// Public API trait for the preference module.
///
/// Shape-qualified operations share the same graph schema underneath; the
/// grid and form variants only differ in how the stored value is decoded.
#[async_trait]
pub trait PreferencesApi: Send + Sync {
    /// All preference entries created by a user, independent of shape.
    async fn get_any_by_user(
        &self,
        user: &str,
    ) -> Result<Vec<AnyPreferenceEntry>, PreferenceError>;

    /// Delete the named instances from a group, returning the removed
    /// count. The group node is retained even when left empty.
    async fn delete_any(
        &self,
        group_name: &str,
        instance_names: &[String],
    ) -> Result<usize, PreferenceError>;

    /// Save or update a grid preference. The request must carry exactly one
    /// entry; the first successful write claims the instance for its owner.
    async fn save_grid(&self, request: GridPreference) -> Result<GridPreference, PreferenceError>;

    /// Grid preferences under a group, filtered by requester identity.
    ///
    /// When `owner` is given, only that owner's entries are returned; in
    /// every case private entries are visible only to their owner.
    async fn get_grid(
        &self,
        grid_name: &str,
        owner: Option<&str>,
        requesting_user: &str,
    ) -> Result<GridPreference, PreferenceError>;

    /// All grid preference entries created by a user.
    async fn get_grid_by_user(
        &self,
        user: &str,
    ) -> Result<Vec<GridPreferenceEntry>, PreferenceError>;

    /// True when an instance with this group and name is claimed by someone
    /// other than `owner` — a write by `owner` would be rejected.
    async fn grid_exists_for_other_owner(
        &self,
        grid_name: &str,
        pref_name: &str,
        owner: &str,
    ) -> Result<bool, PreferenceError>;

    /// Save or update a form preference. Same single-entry and ownership
    /// rules as `save_grid`.
    async fn save_form(&self, request: FormPreference) -> Result<FormPreference, PreferenceError>;

    /// Form preferences under a group, filtered by requester identity.
    async fn get_form(
        &self,
        form_name: &str,
        owner: Option<&str>,
        requesting_user: &str,
    ) -> Result<FormPreference, PreferenceError>;

    /// All form preference entries created by a user.
    async fn get_form_by_user(
        &self,
        user: &str,
    ) -> Result<Vec<FormPreferenceEntry>, PreferenceError>;

    /// Form-shaped mirror of `grid_exists_for_other_owner`.
    async fn form_exists_for_other_owner(
        &self,
        form_name: &str,
        pref_name: &str,
        owner: &str,
    ) -> Result<bool, PreferenceError>;

    /// Look up a preference owner by login name.
    async fn get_owner(&self, login_name: &str) -> Result<UserDto, PreferenceError>;
}
