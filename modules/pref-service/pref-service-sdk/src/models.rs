//! Public models for the preference service module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the preference module and its consumers. Three payload shapes
//! are layered over the same stored graph schema: a raw passthrough shape,
//! a grid shape and a form shape. The grid and form entries also serve as
//! the serialized document stored on a preference instance, which is why
//! their serde names are the sub-field names the decoders extract.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

/// A named collection of raw preference entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnyPreference {
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub preferences: Vec<AnyPreferenceEntry>,
}

/// One raw preference entry; `value` is the stored document, unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnyPreferenceEntry {
    pub id: Option<i64>,
    pub pref_name: String,
    pub name: String,
    pub is_public: bool,
    #[serde(default)]
    pub owner: String,
    pub description: String,
    pub value: String,
}

/// A named collection of grid preference entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridPreference {
    pub id: Option<i64>,
    pub grid_name: String,
    #[serde(default)]
    pub preferences: Vec<GridPreferenceEntry>,
}

impl GridPreference {
    /// Empty shape returned when the named group does not exist.
    #[must_use]
    pub fn empty(grid_name: impl Into<String>) -> Self {
        Self {
            id: None,
            grid_name: grid_name.into(),
            preferences: Vec::new(),
        }
    }
}

/// One grid preference entry. The column and filter collections live inside
/// the instance's stored value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridPreferenceEntry {
    pub id: Option<i64>,
    pub pref_name: String,
    pub grid_name: String,
    pub is_public: bool,
    #[serde(default)]
    pub owner: String,
    pub description: String,
    #[serde(default)]
    pub order_columns: Vec<String>,
    #[serde(default)]
    pub hide_columns: Vec<String>,
    #[serde(default)]
    pub freeze_columns: Vec<String>,
    #[serde(default)]
    pub udf_columns: Vec<String>,
    #[serde(default)]
    pub filters: Vec<GridFilter>,
}

/// One grid filter predicate; `value` is arbitrary JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridFilter {
    pub column_name: String,
    pub value: serde_json::Value,
}

/// A named collection of form preference entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormPreference {
    pub id: Option<i64>,
    pub form_name: String,
    #[serde(default)]
    pub preferences: Vec<FormPreferenceEntry>,
}

impl FormPreference {
    /// Empty shape returned when the named group does not exist.
    #[must_use]
    pub fn empty(form_name: impl Into<String>) -> Self {
        Self {
            id: None,
            form_name: form_name.into(),
            preferences: Vec::new(),
        }
    }
}

/// One form preference entry; the UDF field list lives inside the
/// instance's stored value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormPreferenceEntry {
    pub id: Option<i64>,
    pub pref_name: String,
    pub form_name: String,
    pub is_public: bool,
    #[serde(default)]
    pub owner: String,
    pub description: String,
    #[serde(default)]
    pub udfs: Vec<String>,
}

/// A preference owner as exposed to the request-handling layer.
///
/// Users are provisioned by an external identity system; this module only
/// reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Option<i64>,
    pub user_id: i64,
    pub login_name: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub active: bool,
    pub administrator: bool,
    pub internal: bool,
    pub joined_date: Date,
    pub time_zone: Option<String>,
    pub modified_by: String,
    pub modified_at: OffsetDateTime,
}
