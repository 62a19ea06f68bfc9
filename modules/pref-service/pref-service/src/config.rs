//! Runtime configuration for the preference service.

/// Limits applied to incoming write requests.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Maximum length of group and instance names, in bytes.
    pub max_name_length: usize,
    /// Maximum length of an instance description, in bytes.
    pub max_description_length: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_name_length: 256,
            max_description_length: 1024,
        }
    }
}
