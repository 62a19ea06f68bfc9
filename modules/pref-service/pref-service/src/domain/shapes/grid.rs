//! Grid shape: decodes column collections and filter predicates from the
//! stored value.

use pref_service_sdk::models::{GridPreference, GridPreferenceEntry};

use super::super::codec;
use super::super::entities::{PreferenceGroup, PreferenceInstance};
use super::super::error::DomainError;
use super::{OwnerLabels, SavedEntry};

/// Map a group and its (already filtered) instances to the grid shape.
pub fn to_external(group: &PreferenceGroup) -> Result<GridPreference, DomainError> {
    let mut owners = OwnerLabels::default();
    let preferences = group
        .instances
        .iter()
        .map(|instance| entry_from_instance(instance, &mut owners))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GridPreference {
        id: group.id,
        grid_name: group.name.clone(),
        preferences,
    })
}

/// Map a flat list of instances, e.g. everything created by one user.
pub fn entries(instances: &[PreferenceInstance]) -> Result<Vec<GridPreferenceEntry>, DomainError> {
    let mut owners = OwnerLabels::default();
    instances
        .iter()
        .map(|instance| entry_from_instance(instance, &mut owners))
        .collect()
}

fn entry_from_instance(
    instance: &PreferenceInstance,
    owners: &mut OwnerLabels,
) -> Result<GridPreferenceEntry, DomainError> {
    Ok(GridPreferenceEntry {
        id: instance.id,
        pref_name: instance.name.clone(),
        grid_name: instance.display_name.clone(),
        is_public: instance.is_public,
        owner: owners.resolve(instance),
        description: instance.description.clone(),
        order_columns: codec::string_list(&instance.value, "orderColumns")?,
        hide_columns: codec::string_list(&instance.value, "hideColumns")?,
        freeze_columns: codec::string_list(&instance.value, "freezeColumns")?,
        udf_columns: codec::string_list(&instance.value, "udfColumns")?,
        filters: codec::filter_list(&instance.value)?,
    })
}

/// Reduce a grid write request to its single entry. The whole entry is
/// serialized as the stored payload; identification fields are repeated
/// inside the document, which keeps the decoders self-contained.
pub fn save_entry(request: &GridPreference) -> Result<(String, SavedEntry), DomainError> {
    if request.preferences.len() != 1 {
        return Err(DomainError::invalid_request_shape(
            &request.grid_name,
            request.preferences.len(),
        ));
    }

    let entry = &request.preferences[0];
    let payload =
        serde_json::to_string(entry).map_err(|e| DomainError::store(e.to_string()))?;

    Ok((
        request.grid_name.clone(),
        SavedEntry {
            instance_name: entry.pref_name.clone(),
            owner: entry.owner.clone(),
            is_public: entry.is_public,
            description: entry.description.clone(),
            payload,
        },
    ))
}
