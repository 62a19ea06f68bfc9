//! Local in-process client exposing the SDK API over the domain service.

use std::sync::Arc;

use async_trait::async_trait;

use pref_service_sdk::models::{
    AnyPreferenceEntry, FormPreference, FormPreferenceEntry, GridPreference, GridPreferenceEntry,
    UserDto,
};
use pref_service_sdk::{PreferenceError, PreferencesApi};

use crate::domain::service::Service;

/// `PreferencesApi` implementation handed to the request-handling layer.
#[derive(Clone)]
pub struct LocalPreferencesClient {
    service: Arc<Service>,
}

impl LocalPreferencesClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl PreferencesApi for LocalPreferencesClient {
    async fn get_any_by_user(
        &self,
        user: &str,
    ) -> Result<Vec<AnyPreferenceEntry>, PreferenceError> {
        Ok(self.service.get_any_by_user(user).await?)
    }

    async fn delete_any(
        &self,
        group_name: &str,
        instance_names: &[String],
    ) -> Result<usize, PreferenceError> {
        Ok(self.service.delete_any(group_name, instance_names).await?)
    }

    async fn save_grid(&self, request: GridPreference) -> Result<GridPreference, PreferenceError> {
        Ok(self.service.save_grid(request).await?)
    }

    async fn get_grid(
        &self,
        grid_name: &str,
        owner: Option<&str>,
        requesting_user: &str,
    ) -> Result<GridPreference, PreferenceError> {
        Ok(self.service.get_grid(grid_name, owner, requesting_user).await?)
    }

    async fn get_grid_by_user(
        &self,
        user: &str,
    ) -> Result<Vec<GridPreferenceEntry>, PreferenceError> {
        Ok(self.service.get_grid_by_user(user).await?)
    }

    async fn grid_exists_for_other_owner(
        &self,
        grid_name: &str,
        pref_name: &str,
        owner: &str,
    ) -> Result<bool, PreferenceError> {
        Ok(self
            .service
            .grid_exists_for_other_owner(grid_name, pref_name, owner)
            .await?)
    }

    async fn save_form(&self, request: FormPreference) -> Result<FormPreference, PreferenceError> {
        Ok(self.service.save_form(request).await?)
    }

    async fn get_form(
        &self,
        form_name: &str,
        owner: Option<&str>,
        requesting_user: &str,
    ) -> Result<FormPreference, PreferenceError> {
        Ok(self.service.get_form(form_name, owner, requesting_user).await?)
    }

    async fn get_form_by_user(
        &self,
        user: &str,
    ) -> Result<Vec<FormPreferenceEntry>, PreferenceError> {
        Ok(self.service.get_form_by_user(user).await?)
    }

    async fn form_exists_for_other_owner(
        &self,
        form_name: &str,
        pref_name: &str,
        owner: &str,
    ) -> Result<bool, PreferenceError> {
        Ok(self
            .service
            .form_exists_for_other_owner(form_name, pref_name, owner)
            .await?)
    }

    async fn get_owner(&self, login_name: &str) -> Result<UserDto, PreferenceError> {
        Ok(self.service.get_owner(login_name).await?)
    }
}
