use async_trait::async_trait;

use super::entities::{PreferenceGroup, PreferenceInstance, User};

/// Minimal graph-store contract consumed by the preference engine.
///
/// Implemented by an external graph database client; an in-memory adapter
/// lives in `infra::storage`. Each operation must be individually atomic,
/// and `link_instance_to_user` must be first-wins: linking an instance that
/// already has a creator keeps the existing binding, so the engine's
/// subsequent identity comparison rejects a racing second writer.
#[async_trait]
pub trait GraphStore: Send + Sync {
    async fn find_group_by_name(&self, name: &str) -> anyhow::Result<Option<PreferenceGroup>>;

    /// Like `find_group_by_name`, with instances and their owners eagerly
    /// loaded.
    async fn find_group_with_instances_by_name(
        &self,
        name: &str,
    ) -> anyhow::Result<Option<PreferenceGroup>>;

    /// Persist a group, assigning a surrogate id on first save.
    async fn save_group(&self, group: PreferenceGroup) -> anyhow::Result<PreferenceGroup>;

    /// Persist an instance, assigning a surrogate id on first save.
    /// Relationships are managed separately through the link operations.
    async fn save_instance(
        &self,
        instance: PreferenceInstance,
    ) -> anyhow::Result<PreferenceInstance>;

    /// Remove the given instances together with their relationships.
    async fn delete_instances(&self, ids: &[i64]) -> anyhow::Result<()>;

    /// Create the has-instance relationship.
    async fn link_group_to_instance(&self, group_id: i64, instance_id: i64) -> anyhow::Result<()>;

    /// Create the created-by relationship. First-wins; see the trait docs.
    async fn link_instance_to_user(&self, instance_id: i64, user_id: i64) -> anyhow::Result<()>;

    /// Instances matching `(group_name, instance_name)` whose creator is
    /// someone other than `excluded_owner`.
    async fn find_instances_not_owned_by(
        &self,
        group_name: &str,
        instance_name: &str,
        excluded_owner: &str,
    ) -> anyhow::Result<Vec<PreferenceInstance>>;

    async fn find_user_by_login_name(&self, name: &str) -> anyhow::Result<Option<User>>;

    /// Instances created by the given user. The returned instances carry no
    /// loaded relationships; owner labels fall back to the denormalized
    /// field.
    async fn find_instances_by_creator(
        &self,
        login_name: &str,
    ) -> anyhow::Result<Vec<PreferenceInstance>>;
}
