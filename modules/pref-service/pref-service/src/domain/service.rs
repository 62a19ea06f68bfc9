//! Preference resolution engine.
//!
//! Finds-or-creates groups and named instances, binds each instance to its
//! first writer and rejects overwrites from anyone else, filters reads by
//! requester identity and hands the surviving instances to the shape
//! adapters. Stateless and request-scoped: every operation is a bounded
//! sequence of graph-store calls with no caching between requests.

use std::sync::Arc;

use pref_service_sdk::models::{
    AnyPreferenceEntry, FormPreference, FormPreferenceEntry, GridPreference, GridPreferenceEntry,
    UserDto,
};

use crate::config::ServiceConfig;

use super::entities::{PreferenceGroup, PreferenceInstance};
use super::error::DomainError;
use super::repo::GraphStore;
use super::shapes::{self, SavedEntry};
use super::visibility;

pub struct Service {
    store: Arc<dyn GraphStore>,
    config: ServiceConfig,
}

impl Service {
    pub fn new(store: Arc<dyn GraphStore>, config: ServiceConfig) -> Self {
        Self { store, config }
    }

    /// All preference entries created by a user, independent of shape.
    pub async fn get_any_by_user(
        &self,
        user: &str,
    ) -> Result<Vec<AnyPreferenceEntry>, DomainError> {
        let instances = self
            .store
            .find_instances_by_creator(user)
            .await
            .map_err(store_err)?;

        Ok(shapes::any::entries(&instances))
    }

    /// Delete the named instances from a group; the group node is retained
    /// even when left with zero instances.
    pub async fn delete_any(
        &self,
        group_name: &str,
        instance_names: &[String],
    ) -> Result<usize, DomainError> {
        let group = self
            .store
            .find_group_with_instances_by_name(group_name)
            .await
            .map_err(store_err)?
            .ok_or_else(|| DomainError::group_not_found(group_name))?;

        let ids: Vec<i64> = group
            .instances
            .iter()
            .filter(|instance| instance_names.iter().any(|name| *name == instance.name))
            .filter_map(|instance| instance.id)
            .collect();

        if !ids.is_empty() {
            self.store.delete_instances(&ids).await.map_err(store_err)?;
        }
        tracing::debug!(group = group_name, removed = ids.len(), "deleted preference instances");

        Ok(ids.len())
    }

    /// Save or update a grid preference.
    pub async fn save_grid(&self, request: GridPreference) -> Result<GridPreference, DomainError> {
        let (group_name, entry) = shapes::grid::save_entry(&request)?;
        let group = self.save_preference(&group_name, entry).await?;
        shapes::grid::to_external(&group)
    }

    /// Grid preferences under a group, filtered by requester identity. An
    /// absent group reads as an empty shape.
    pub async fn get_grid(
        &self,
        grid_name: &str,
        owner: Option<&str>,
        requesting_user: &str,
    ) -> Result<GridPreference, DomainError> {
        match self
            .load_group_filtered(grid_name, owner, requesting_user)
            .await?
        {
            Some(group) => shapes::grid::to_external(&group),
            None => Ok(GridPreference::empty(grid_name)),
        }
    }

    /// All grid preference entries created by a user.
    pub async fn get_grid_by_user(
        &self,
        user: &str,
    ) -> Result<Vec<GridPreferenceEntry>, DomainError> {
        let instances = self
            .store
            .find_instances_by_creator(user)
            .await
            .map_err(store_err)?;

        shapes::grid::entries(&instances)
    }

    /// True when an instance with this group and name is already claimed by
    /// someone other than `owner`.
    pub async fn grid_exists_for_other_owner(
        &self,
        grid_name: &str,
        pref_name: &str,
        owner: &str,
    ) -> Result<bool, DomainError> {
        self.exists_for_other_owner(grid_name, pref_name, owner).await
    }

    /// Save or update a form preference.
    pub async fn save_form(&self, request: FormPreference) -> Result<FormPreference, DomainError> {
        let (group_name, entry) = shapes::form::save_entry(&request)?;
        let group = self.save_preference(&group_name, entry).await?;
        shapes::form::to_external(&group)
    }

    /// Form preferences under a group, filtered by requester identity.
    pub async fn get_form(
        &self,
        form_name: &str,
        owner: Option<&str>,
        requesting_user: &str,
    ) -> Result<FormPreference, DomainError> {
        match self
            .load_group_filtered(form_name, owner, requesting_user)
            .await?
        {
            Some(group) => shapes::form::to_external(&group),
            None => Ok(FormPreference::empty(form_name)),
        }
    }

    /// All form preference entries created by a user.
    pub async fn get_form_by_user(
        &self,
        user: &str,
    ) -> Result<Vec<FormPreferenceEntry>, DomainError> {
        let instances = self
            .store
            .find_instances_by_creator(user)
            .await
            .map_err(store_err)?;

        shapes::form::entries(&instances)
    }

    /// Form-shaped mirror of `grid_exists_for_other_owner`.
    pub async fn form_exists_for_other_owner(
        &self,
        form_name: &str,
        pref_name: &str,
        owner: &str,
    ) -> Result<bool, DomainError> {
        self.exists_for_other_owner(form_name, pref_name, owner).await
    }

    /// Look up a preference owner by login name.
    pub async fn get_owner(&self, login_name: &str) -> Result<UserDto, DomainError> {
        let user = self
            .store
            .find_user_by_login_name(login_name)
            .await
            .map_err(store_err)?
            .ok_or_else(|| DomainError::unknown_user(login_name))?;

        Ok(shapes::user_to_external(&user))
    }

    /// Find-or-create the group and the named instance, bind the instance
    /// to its first writer and persist the updated fields.
    ///
    /// The first successful write permanently fixes the owner: a later
    /// write by a different resolved user fails with `OwnershipConflict`
    /// before any field is touched. Re-writes by the bound owner update
    /// the mutable fields without creating a second created-by
    /// relationship.
    async fn save_preference(
        &self,
        group_name: &str,
        entry: SavedEntry,
    ) -> Result<PreferenceGroup, DomainError> {
        tracing::debug!(
            group = group_name,
            instance = %entry.instance_name,
            "saving preference"
        );

        self.validate_entry(group_name, &entry)?;

        // Resolve the owner before any mutation so an unknown user aborts
        // with storage untouched.
        let owner = self
            .store
            .find_user_by_login_name(&entry.owner)
            .await
            .map_err(store_err)?
            .ok_or_else(|| DomainError::unknown_user(&entry.owner))?;
        let owner_id = require_id(owner.id, "user")?;

        let group = match self
            .store
            .find_group_with_instances_by_name(group_name)
            .await
            .map_err(store_err)?
        {
            Some(group) => group,
            None => self
                .store
                .save_group(PreferenceGroup::new(group_name))
                .await
                .map_err(store_err)?,
        };
        let group_id = require_id(group.id, "group")?;

        // First match by name is authoritative; the engine itself never
        // creates a duplicate name within a group.
        match group
            .instances
            .iter()
            .find(|instance| instance.name == entry.instance_name)
        {
            None => {
                let instance = PreferenceInstance {
                    id: None,
                    name: entry.instance_name.clone(),
                    display_name: group_name.to_owned(),
                    is_public: entry.is_public,
                    owner_name: entry.owner.clone(),
                    description: entry.description.clone(),
                    value: entry.payload.clone(),
                    owner: None,
                };
                let saved = self.store.save_instance(instance).await.map_err(store_err)?;
                let instance_id = require_id(saved.id, "instance")?;

                self.store
                    .link_group_to_instance(group_id, instance_id)
                    .await
                    .map_err(store_err)?;
                self.store
                    .link_instance_to_user(instance_id, owner_id)
                    .await
                    .map_err(store_err)?;
            }
            Some(existing) => {
                let instance_id = require_id(existing.id, "instance")?;

                match existing.owner.as_ref() {
                    None => {
                        self.store
                            .link_instance_to_user(instance_id, owner_id)
                            .await
                            .map_err(store_err)?;
                    }
                    Some(bound) if bound.id != owner.id => {
                        tracing::warn!(
                            group = group_name,
                            instance = %entry.instance_name,
                            "rejected write by non-owning user"
                        );
                        return Err(DomainError::ownership_conflict(&entry.instance_name));
                    }
                    Some(_) => {}
                }

                let mut updated = existing.clone();
                updated.is_public = entry.is_public;
                updated.description = entry.description.clone();
                updated.value = entry.payload.clone();
                self.store.save_instance(updated).await.map_err(store_err)?;
            }
        }

        self.store
            .find_group_with_instances_by_name(group_name)
            .await
            .map_err(store_err)?
            .ok_or_else(|| DomainError::group_not_found(group_name))
    }

    async fn load_group_filtered(
        &self,
        group_name: &str,
        owner_scope: Option<&str>,
        requesting_user: &str,
    ) -> Result<Option<PreferenceGroup>, DomainError> {
        let Some(mut group) = self
            .store
            .find_group_with_instances_by_name(group_name)
            .await
            .map_err(store_err)?
        else {
            return Ok(None);
        };

        group.instances = visibility::filter(group.instances, requesting_user, owner_scope);
        Ok(Some(group))
    }

    async fn exists_for_other_owner(
        &self,
        group_name: &str,
        instance_name: &str,
        excluded_owner: &str,
    ) -> Result<bool, DomainError> {
        let instances = self
            .store
            .find_instances_not_owned_by(group_name, instance_name, excluded_owner)
            .await
            .map_err(store_err)?;

        Ok(!instances.is_empty())
    }

    fn validate_entry(&self, group_name: &str, entry: &SavedEntry) -> Result<(), DomainError> {
        let max = self.config.max_name_length;
        if group_name.len() > max || entry.instance_name.len() > max {
            return Err(DomainError::validation(
                "name",
                format!("longer than {max} bytes"),
            ));
        }
        if entry.description.len() > self.config.max_description_length {
            return Err(DomainError::validation(
                "description",
                format!("longer than {} bytes", self.config.max_description_length),
            ));
        }
        Ok(())
    }
}

fn store_err(err: anyhow::Error) -> DomainError {
    DomainError::store(err.to_string())
}

fn require_id(id: Option<i64>, entity: &str) -> Result<i64, DomainError> {
    id.ok_or_else(|| DomainError::store(format!("{entity} has no id after save")))
}
