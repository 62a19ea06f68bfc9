//! Read-time visibility rules for preference instances.

use super::entities::PreferenceInstance;

/// Keep the instances the requester is entitled to see, preserving the
/// input order.
///
/// An instance survives when it matches the owner scope (if one is given)
/// and is either public or owned by the requesting user. This is the sole
/// access-control mechanism for reads: a private instance is invisible to
/// every requester except its owner, regardless of scope.
#[must_use]
pub fn filter(
    instances: Vec<PreferenceInstance>,
    requesting_user: &str,
    owner_scope: Option<&str>,
) -> Vec<PreferenceInstance> {
    instances
        .into_iter()
        .filter(|instance| owner_scope.is_none_or(|owner| instance.owner_login() == owner))
        .filter(|instance| instance.is_public || instance.owner_login() == requesting_user)
        .collect()
}
