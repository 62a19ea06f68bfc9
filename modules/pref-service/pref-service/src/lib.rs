//! Preference service module implementation.
//!
//! The public API is defined in `pref-service-sdk` and re-exported here.

pub use pref_service_sdk::{PreferenceError, PreferencesApi};

pub mod config;
pub mod domain;
pub mod infra;
pub mod local_client;

pub use local_client::LocalPreferencesClient;
