//! In-memory graph-store adapter.
//!
//! Backs the integration tests and embedded deployments. Nodes live in
//! id-keyed maps and relationships in edge maps; every operation takes the
//! graph lock exactly once, which makes each store call atomic and the
//! created-by link first-wins as the `GraphStore` contract requires.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::entities::{PreferenceGroup, PreferenceInstance, User};
use crate::domain::repo::GraphStore;

#[derive(Default)]
struct Graph {
    last_id: i64,
    groups: HashMap<i64, PreferenceGroup>,
    instances: HashMap<i64, PreferenceInstance>,
    users: HashMap<i64, User>,
    /// has-instance edges, in insertion order per group.
    group_instances: HashMap<i64, Vec<i64>>,
    /// created-by edges.
    instance_creator: HashMap<i64, i64>,
}

impl Graph {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn group_id_by_name(&self, name: &str) -> Option<i64> {
        self.groups
            .iter()
            .find(|(_, group)| group.name == name)
            .map(|(id, _)| *id)
    }

    /// Instance with its created-by target attached.
    fn hydrate_instance(&self, id: i64) -> Option<PreferenceInstance> {
        let mut instance = self.instances.get(&id)?.clone();
        instance.owner = self
            .instance_creator
            .get(&id)
            .and_then(|user_id| self.users.get(user_id))
            .cloned();
        Some(instance)
    }

    fn hydrate_group(&self, id: i64, with_instances: bool) -> Option<PreferenceGroup> {
        let mut group = self.groups.get(&id)?.clone();
        if with_instances {
            group.instances = self
                .group_instances
                .get(&id)
                .into_iter()
                .flatten()
                .filter_map(|instance_id| self.hydrate_instance(*instance_id))
                .collect();
        }
        Some(group)
    }

    fn creator_login(&self, instance_id: i64) -> Option<&str> {
        self.instance_creator
            .get(&instance_id)
            .and_then(|user_id| self.users.get(user_id))
            .map(|user| user.login_name.as_str())
    }
}

#[derive(Default)]
pub struct InMemoryGraphStore {
    graph: RwLock<Graph>,
}

impl InMemoryGraphStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Provision a user node, assigning its surrogate id. Users are
    /// otherwise read-only through the `GraphStore` contract.
    pub fn add_user(&self, mut user: User) -> User {
        let mut graph = self.graph.write();
        let id = graph.next_id();
        user.id = Some(id);
        graph.users.insert(id, user.clone());
        user
    }
}

#[async_trait]
impl GraphStore for InMemoryGraphStore {
    async fn find_group_by_name(&self, name: &str) -> anyhow::Result<Option<PreferenceGroup>> {
        let graph = self.graph.read();
        Ok(graph
            .group_id_by_name(name)
            .and_then(|id| graph.hydrate_group(id, false)))
    }

    async fn find_group_with_instances_by_name(
        &self,
        name: &str,
    ) -> anyhow::Result<Option<PreferenceGroup>> {
        let graph = self.graph.read();
        Ok(graph
            .group_id_by_name(name)
            .and_then(|id| graph.hydrate_group(id, true)))
    }

    async fn save_group(&self, mut group: PreferenceGroup) -> anyhow::Result<PreferenceGroup> {
        let mut graph = self.graph.write();
        let id = match group.id {
            Some(id) => {
                anyhow::ensure!(graph.groups.contains_key(&id), "no group with id {id}");
                id
            }
            None => graph.next_id(),
        };
        group.id = Some(id);

        // Instances are attached through link operations, never stored on
        // the node itself.
        let mut stored = group.clone();
        stored.instances = Vec::new();
        graph.groups.insert(id, stored);

        Ok(group)
    }

    async fn save_instance(
        &self,
        mut instance: PreferenceInstance,
    ) -> anyhow::Result<PreferenceInstance> {
        let mut graph = self.graph.write();
        let id = match instance.id {
            Some(id) => {
                anyhow::ensure!(
                    graph.instances.contains_key(&id),
                    "no instance with id {id}"
                );
                id
            }
            None => graph.next_id(),
        };
        instance.id = Some(id);

        // The created-by relationship lives in the edge map only.
        let mut stored = instance.clone();
        stored.owner = None;
        graph.instances.insert(id, stored);

        Ok(instance)
    }

    async fn delete_instances(&self, ids: &[i64]) -> anyhow::Result<()> {
        let mut graph = self.graph.write();
        for id in ids {
            graph.instances.remove(id);
            graph.instance_creator.remove(id);
            for edges in graph.group_instances.values_mut() {
                edges.retain(|instance_id| instance_id != id);
            }
        }
        Ok(())
    }

    async fn link_group_to_instance(&self, group_id: i64, instance_id: i64) -> anyhow::Result<()> {
        let mut graph = self.graph.write();
        anyhow::ensure!(
            graph.groups.contains_key(&group_id),
            "no group with id {group_id}"
        );
        anyhow::ensure!(
            graph.instances.contains_key(&instance_id),
            "no instance with id {instance_id}"
        );

        let edges = graph.group_instances.entry(group_id).or_default();
        if !edges.contains(&instance_id) {
            edges.push(instance_id);
        }
        Ok(())
    }

    async fn link_instance_to_user(&self, instance_id: i64, user_id: i64) -> anyhow::Result<()> {
        let mut graph = self.graph.write();
        anyhow::ensure!(
            graph.instances.contains_key(&instance_id),
            "no instance with id {instance_id}"
        );
        anyhow::ensure!(
            graph.users.contains_key(&user_id),
            "no user with id {user_id}"
        );

        // First-wins: an existing creator edge is never re-targeted.
        graph.instance_creator.entry(instance_id).or_insert(user_id);
        Ok(())
    }

    async fn find_instances_not_owned_by(
        &self,
        group_name: &str,
        instance_name: &str,
        excluded_owner: &str,
    ) -> anyhow::Result<Vec<PreferenceInstance>> {
        let graph = self.graph.read();
        let Some(group_id) = graph.group_id_by_name(group_name) else {
            return Ok(Vec::new());
        };

        let matches = graph
            .group_instances
            .get(&group_id)
            .into_iter()
            .flatten()
            .filter(|instance_id| {
                graph
                    .instances
                    .get(*instance_id)
                    .is_some_and(|instance| instance.name == instance_name)
            })
            .filter(|instance_id| {
                graph
                    .creator_login(**instance_id)
                    .is_some_and(|login| login != excluded_owner)
            })
            .filter_map(|instance_id| graph.hydrate_instance(*instance_id))
            .collect();

        Ok(matches)
    }

    async fn find_user_by_login_name(&self, name: &str) -> anyhow::Result<Option<User>> {
        let graph = self.graph.read();
        Ok(graph
            .users
            .values()
            .find(|user| user.login_name == name)
            .cloned())
    }

    async fn find_instances_by_creator(
        &self,
        login_name: &str,
    ) -> anyhow::Result<Vec<PreferenceInstance>> {
        let graph = self.graph.read();
        let mut ids: Vec<i64> = graph
            .instance_creator
            .iter()
            .filter(|(_, user_id)| {
                graph
                    .users
                    .get(user_id)
                    .is_some_and(|user| user.login_name == login_name)
            })
            .map(|(instance_id, _)| *instance_id)
            .collect();
        ids.sort_unstable();

        // Relationships stay unloaded here, matching what a depth-zero
        // creator query returns.
        Ok(ids
            .into_iter()
            .filter_map(|id| graph.instances.get(&id).cloned())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::{Date, Month, OffsetDateTime};

    fn user(login: &str) -> User {
        User {
            id: None,
            user_id: 1,
            login_name: login.to_owned(),
            first_name: login.to_owned(),
            last_name: "Test".to_owned(),
            phone: String::new(),
            email: format!("{login}@example.com"),
            internal: true,
            active: true,
            administrator: false,
            joined_date: Date::from_calendar_date(2023, Month::October, 2).unwrap(),
            time_zone: None,
            modified_by: "sync".to_owned(),
            modified_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    fn instance(name: &str, owner: &str) -> PreferenceInstance {
        PreferenceInstance {
            id: None,
            name: name.to_owned(),
            display_name: "Posicion".to_owned(),
            is_public: true,
            owner_name: owner.to_owned(),
            description: String::new(),
            value: "{}".to_owned(),
            owner: None,
        }
    }

    #[tokio::test]
    async fn save_assigns_ids_once() {
        let store = InMemoryGraphStore::new();

        let group = store
            .save_group(PreferenceGroup::new("Posicion"))
            .await
            .unwrap();
        assert!(group.id.is_some());

        let again = store.save_group(group.clone()).await.unwrap();
        assert_eq!(again.id, group.id);
    }

    #[tokio::test]
    async fn shallow_group_lookup_loads_no_instances() {
        let store = InMemoryGraphStore::new();

        let group = store
            .save_group(PreferenceGroup::new("Posicion"))
            .await
            .unwrap();
        let saved = store.save_instance(instance("Resumen", "alice")).await.unwrap();
        store
            .link_group_to_instance(group.id.unwrap(), saved.id.unwrap())
            .await
            .unwrap();

        let shallow = store.find_group_by_name("Posicion").await.unwrap().unwrap();
        assert_eq!(shallow.id, group.id);
        assert!(shallow.instances.is_empty());
    }

    #[tokio::test]
    async fn creator_link_is_first_wins() {
        let store = InMemoryGraphStore::new();
        let alice = store.add_user(user("alice"));
        let bob = store.add_user(user("bob"));

        let group = store
            .save_group(PreferenceGroup::new("Posicion"))
            .await
            .unwrap();
        let saved = store.save_instance(instance("Resumen", "alice")).await.unwrap();
        store
            .link_group_to_instance(group.id.unwrap(), saved.id.unwrap())
            .await
            .unwrap();

        store
            .link_instance_to_user(saved.id.unwrap(), alice.id.unwrap())
            .await
            .unwrap();
        store
            .link_instance_to_user(saved.id.unwrap(), bob.id.unwrap())
            .await
            .unwrap();

        let loaded = store
            .find_group_with_instances_by_name("Posicion")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(loaded.instances[0].owner_login(), "alice");
    }

    #[tokio::test]
    async fn delete_removes_node_and_edges() {
        let store = InMemoryGraphStore::new();
        let alice = store.add_user(user("alice"));

        let group = store
            .save_group(PreferenceGroup::new("Posicion"))
            .await
            .unwrap();
        let saved = store.save_instance(instance("Resumen", "alice")).await.unwrap();
        store
            .link_group_to_instance(group.id.unwrap(), saved.id.unwrap())
            .await
            .unwrap();
        store
            .link_instance_to_user(saved.id.unwrap(), alice.id.unwrap())
            .await
            .unwrap();

        store.delete_instances(&[saved.id.unwrap()]).await.unwrap();

        let loaded = store
            .find_group_with_instances_by_name("Posicion")
            .await
            .unwrap()
            .unwrap();
        assert!(loaded.instances.is_empty());
        assert!(store
            .find_instances_by_creator("alice")
            .await
            .unwrap()
            .is_empty());
    }
}
