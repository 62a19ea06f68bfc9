//! SDK for the preference service module.
//!
//! Defines the public contract consumed by other modules and by the
//! request-handling layer: the [`PreferencesApi`] trait, the external
//! payload shapes and the error taxonomy. The implementation lives in the
//! `pref-service` crate.

pub mod api;
pub mod errors;
pub mod models;

pub use api::PreferencesApi;
pub use errors::PreferenceError;
pub use models::{
    AnyPreference, AnyPreferenceEntry, FormPreference, FormPreferenceEntry, GridFilter,
    GridPreference, GridPreferenceEntry, UserDto,
};
