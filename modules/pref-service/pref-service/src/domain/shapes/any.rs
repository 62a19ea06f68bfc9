//! Generic passthrough shape: the stored value travels unchanged.

use pref_service_sdk::models::{AnyPreference, AnyPreferenceEntry};

use super::super::entities::{PreferenceGroup, PreferenceInstance};
use super::OwnerLabels;

/// Map a group and its (already filtered) instances, leaving each stored
/// value opaque.
#[must_use]
pub fn to_external(group: &PreferenceGroup) -> AnyPreference {
    AnyPreference {
        id: group.id,
        name: group.name.clone(),
        preferences: entries(&group.instances),
    }
}

/// Map a flat list of instances, e.g. everything created by one user.
#[must_use]
pub fn entries(instances: &[PreferenceInstance]) -> Vec<AnyPreferenceEntry> {
    let mut owners = OwnerLabels::default();
    instances
        .iter()
        .map(|instance| entry_from_instance(instance, &mut owners))
        .collect()
}

fn entry_from_instance(
    instance: &PreferenceInstance,
    owners: &mut OwnerLabels,
) -> AnyPreferenceEntry {
    AnyPreferenceEntry {
        id: instance.id,
        pref_name: instance.name.clone(),
        name: instance.display_name.clone(),
        is_public: instance.is_public,
        owner: owners.resolve(instance),
        description: instance.description.clone(),
        value: instance.value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_passes_through_unchanged() {
        let raw = r#"{"orderColumns":["a"],"custom":true}"#;
        let group = PreferenceGroup {
            id: Some(3),
            name: "Posicion".to_owned(),
            instances: vec![PreferenceInstance {
                id: Some(4),
                name: "Resumen".to_owned(),
                display_name: "Posicion".to_owned(),
                is_public: true,
                owner_name: "alice".to_owned(),
                description: String::new(),
                value: raw.to_owned(),
                owner: None,
            }],
        };

        let external = to_external(&group);

        assert_eq!(external.name, "Posicion");
        assert_eq!(external.preferences.len(), 1);
        assert_eq!(external.preferences[0].value, raw);
        assert_eq!(external.preferences[0].owner, "alice");
    }
}
