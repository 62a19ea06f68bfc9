//! Extraction of named sub-collections from an instance's stored value.
//!
//! The stored value is one JSON document per instance. Extraction never
//! fails because an expected sub-field is missing or null; it fails with
//! `MalformedPreference` when the document itself cannot be parsed or the
//! requested field does not decode to the expected collection.
//!
//! Nothing is enforced on write: the engine stores whatever document the
//! shape adapter produced.

use serde_json::Value;

use pref_service_sdk::models::GridFilter;

use super::error::DomainError;

/// Decode a sub-field holding an ordered sequence of keys, e.g.
/// `orderColumns` or `udfs`.
pub fn string_list(value: &str, field: &str) -> Result<Vec<String>, DomainError> {
    extract(value, field)
}

/// Decode the `filters` sub-field, an ordered sequence of column/value
/// predicates.
pub fn filter_list(value: &str) -> Result<Vec<GridFilter>, DomainError> {
    extract(value, "filters")
}

fn extract<T>(value: &str, field: &str) -> Result<Vec<T>, DomainError>
where
    T: serde::de::DeserializeOwned,
{
    let document: Value =
        serde_json::from_str(value).map_err(|_| DomainError::malformed(field))?;

    match document.get(field) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(node) => {
            serde_json::from_value(node.clone()).map_err(|_| DomainError::malformed(field))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_present_column_list() {
        let value = json!({"orderColumns": ["a", "b"], "hideColumns": []}).to_string();

        assert_eq!(string_list(&value, "orderColumns").unwrap(), vec!["a", "b"]);
        assert!(string_list(&value, "hideColumns").unwrap().is_empty());
    }

    #[test]
    fn absent_or_null_field_yields_empty_collection() {
        let value = json!({"orderColumns": ["a"], "filters": null}).to_string();

        assert!(string_list(&value, "freezeColumns").unwrap().is_empty());
        assert!(filter_list(&value).unwrap().is_empty());
    }

    #[test]
    fn unparseable_document_names_the_offending_field() {
        let err = string_list("not a json document", "udfColumns").unwrap_err();

        assert!(
            matches!(err, DomainError::MalformedPreference { ref field } if field == "udfColumns")
        );
    }

    #[test]
    fn wrongly_typed_field_is_malformed() {
        let value = json!({"orderColumns": "not-a-list"}).to_string();

        let err = string_list(&value, "orderColumns").unwrap_err();
        assert!(
            matches!(err, DomainError::MalformedPreference { ref field } if field == "orderColumns")
        );
    }

    #[test]
    fn decodes_filter_predicates_in_order() {
        let value = json!({
            "filters": [
                {"columnName": "estado", "value": "activo"},
                {"columnName": "monto", "value": 100}
            ]
        })
        .to_string();

        let filters = filter_list(&value).unwrap();
        assert_eq!(filters.len(), 2);
        assert_eq!(filters[0].column_name, "estado");
        assert_eq!(filters[0].value, json!("activo"));
        assert_eq!(filters[1].value, json!(100));
    }
}
