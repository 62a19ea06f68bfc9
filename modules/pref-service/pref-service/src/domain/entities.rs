//! Graph entities for the preference schema.
//!
//! Three node kinds form a fixed three-level graph: a group owns instances
//! via a has-instance relationship, and an instance points at the user who
//! claimed it via a created-by relationship that is established exactly
//! once and never re-targeted.

use time::{Date, OffsetDateTime};

/// A named collection of preference instances (a grid name or form name).
///
/// Created lazily on the first write for a given name and never deleted;
/// removing all its instances leaves an empty group behind.
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceGroup {
    pub id: Option<i64>,
    pub name: String,
    /// Populated only by eager-loading store queries.
    pub instances: Vec<PreferenceInstance>,
}

impl PreferenceGroup {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            instances: Vec::new(),
        }
    }
}

/// One named setting within a group.
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceInstance {
    pub id: Option<i64>,
    pub name: String,
    /// Copy of the group name taken at creation time.
    pub display_name: String,
    pub is_public: bool,
    /// Denormalized owner login, set at creation. The created-by
    /// relationship is authoritative once it exists.
    pub owner_name: String,
    pub description: String,
    /// Opaque serialized payload, normally a JSON document.
    pub value: String,
    /// Target of the created-by relationship, when loaded.
    pub owner: Option<User>,
}

impl PreferenceInstance {
    /// Owner login as seen by filtering and mapping: the bound user when
    /// the relationship is loaded, the denormalized field otherwise.
    #[must_use]
    pub fn owner_login(&self) -> &str {
        self.owner
            .as_ref()
            .map_or(self.owner_name.as_str(), |user| user.login_name.as_str())
    }
}

/// A provisioned user. Read-only for this module; users are synchronized
/// from an external identity system and looked up by login name.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Option<i64>,
    /// Identifier assigned by the external identity system.
    pub user_id: i64,
    pub login_name: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub internal: bool,
    pub active: bool,
    pub administrator: bool,
    pub joined_date: Date,
    pub time_zone: Option<String>,
    pub modified_by: String,
    pub modified_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(login: &str) -> User {
        User {
            id: Some(7),
            user_id: 70,
            login_name: login.to_owned(),
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            phone: String::new(),
            email: format!("{login}@example.com"),
            internal: true,
            active: true,
            administrator: false,
            joined_date: Date::from_calendar_date(2023, time::Month::October, 2).unwrap(),
            time_zone: None,
            modified_by: "sync".to_owned(),
            modified_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn owner_login_prefers_bound_user() {
        let instance = PreferenceInstance {
            id: Some(1),
            name: "Resumen".to_owned(),
            display_name: "Posicion".to_owned(),
            is_public: false,
            owner_name: "stale".to_owned(),
            description: String::new(),
            value: "{}".to_owned(),
            owner: Some(user("alice")),
        };

        assert_eq!(instance.owner_login(), "alice");
    }

    #[test]
    fn owner_login_falls_back_to_denormalized_field() {
        let instance = PreferenceInstance {
            id: Some(1),
            name: "Resumen".to_owned(),
            display_name: "Posicion".to_owned(),
            is_public: false,
            owner_name: "alice".to_owned(),
            description: String::new(),
            value: "{}".to_owned(),
            owner: None,
        };

        assert_eq!(instance.owner_login(), "alice");
    }
}
