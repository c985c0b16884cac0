//! Read-only view of an identity-service account.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Membership status of an account in one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleMembership {
    pub role_status: String,
}

/// An account record as read from the identity service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub username: String,
    /// Role name → membership status (e.g. `packager` → `approved`).
    #[serde(default)]
    pub group_roles: HashMap<String, RoleMembership>,
}

impl Person {
    /// Whether this account holds an approved `packager` role.
    #[must_use]
    pub fn is_approved_packager(&self) -> bool {
        self.group_roles
            .get("packager")
            .is_some_and(|membership| membership.role_status == "approved")
    }
}
