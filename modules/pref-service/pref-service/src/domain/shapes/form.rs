//! Form shape: decodes the UDF field list from the stored value.

use pref_service_sdk::models::{FormPreference, FormPreferenceEntry};

use super::super::codec;
use super::super::entities::{PreferenceGroup, PreferenceInstance};
use super::super::error::DomainError;
use super::{OwnerLabels, SavedEntry};

/// Map a group and its (already filtered) instances to the form shape.
pub fn to_external(group: &PreferenceGroup) -> Result<FormPreference, DomainError> {
    let mut owners = OwnerLabels::default();
    let preferences = group
        .instances
        .iter()
        .map(|instance| entry_from_instance(instance, &mut owners))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FormPreference {
        id: group.id,
        form_name: group.name.clone(),
        preferences,
    })
}

/// Map a flat list of instances, e.g. everything created by one user.
pub fn entries(instances: &[PreferenceInstance]) -> Result<Vec<FormPreferenceEntry>, DomainError> {
    let mut owners = OwnerLabels::default();
    instances
        .iter()
        .map(|instance| entry_from_instance(instance, &mut owners))
        .collect()
}

fn entry_from_instance(
    instance: &PreferenceInstance,
    owners: &mut OwnerLabels,
) -> Result<FormPreferenceEntry, DomainError> {
    Ok(FormPreferenceEntry {
        id: instance.id,
        pref_name: instance.name.clone(),
        form_name: instance.display_name.clone(),
        is_public: instance.is_public,
        owner: owners.resolve(instance),
        description: instance.description.clone(),
        udfs: codec::string_list(&instance.value, "udfs")?,
    })
}

/// Reduce a form write request to its single entry, serializing the whole
/// entry as the stored payload.
pub fn save_entry(request: &FormPreference) -> Result<(String, SavedEntry), DomainError> {
    if request.preferences.len() != 1 {
        return Err(DomainError::invalid_request_shape(
            &request.form_name,
            request.preferences.len(),
        ));
    }

    let entry = &request.preferences[0];
    let payload =
        serde_json::to_string(entry).map_err(|e| DomainError::store(e.to_string()))?;

    Ok((
        request.form_name.clone(),
        SavedEntry {
            instance_name: entry.pref_name.clone(),
            owner: entry.owner.clone(),
            is_public: entry.is_public,
            description: entry.description.clone(),
            payload,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn udfs_round_trip_and_missing_field_is_empty() {
        let request = FormPreference {
            id: None,
            form_name: "Mov_efectivo".to_owned(),
            preferences: vec![FormPreferenceEntry {
                id: None,
                pref_name: "Captura".to_owned(),
                form_name: "Mov_efectivo".to_owned(),
                is_public: false,
                owner: "adminTEST".to_owned(),
                description: "captura rapida".to_owned(),
                udfs: vec!["fechaValor".to_owned(), "contraparte".to_owned()],
            }],
        };

        let (_, saved) = save_entry(&request).unwrap();
        assert_eq!(
            codec::string_list(&saved.payload, "udfs").unwrap(),
            vec!["fechaValor", "contraparte"]
        );

        // A grid-written value has no udfs entry; the form decoder treats
        // that as empty rather than failing.
        let instance = PreferenceInstance {
            id: Some(1),
            name: "Resumen".to_owned(),
            display_name: "Posicion".to_owned(),
            is_public: true,
            owner_name: "adminTEST".to_owned(),
            description: String::new(),
            value: r#"{"orderColumns":["a"]}"#.to_owned(),
            owner: None,
        };
        let mapped = entries(std::slice::from_ref(&instance)).unwrap();
        assert!(mapped[0].udfs.is_empty());
    }
}
