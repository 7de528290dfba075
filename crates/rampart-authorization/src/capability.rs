//! Registry mutation capabilities.
//!
//! Registries accept any well-formed add/remove; whether the current user may
//! issue one is decided here, at the calling boundary.

use rampart_core::{RampartError, Role};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// A mutation right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// Add and remove users
    ManageUsers,
    /// Add and remove roles
    ManageRoles,
}

impl Capability {
    /// Short label for logs and notices.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ManageUsers => "user management",
            Self::ManageRoles => "role management",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Check if the given role holds a capability.
///
/// Without a role (not logged in) nothing is granted.
pub fn role_has_capability(role: Option<Role>, capability: Capability) -> bool {
    let Some(role) = role else {
        return false;
    };
    match capability {
        Capability::ManageUsers => matches!(role, Role::SuperAdmin | Role::Admin),
        Capability::ManageRoles => matches!(role, Role::SuperAdmin),
    }
}

/// Require a capability for an operation.
pub fn require_capability(
    role: Option<Role>,
    capability: Capability,
    operation: &str,
) -> Result<(), RampartError> {
    if role_has_capability(role, capability) {
        return Ok(());
    }
    warn!(%capability, role = ?role, operation, "capability denied");
    match role {
        Some(role) => Err(RampartError::permission_denied(format!(
            "{operation} requires {capability}, which {role} does not have"
        ))),
        None => Err(RampartError::permission_denied(format!(
            "{operation} requires an authenticated session"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manage_users() {
        assert!(role_has_capability(Some(Role::SuperAdmin), Capability::ManageUsers));
        assert!(role_has_capability(Some(Role::Admin), Capability::ManageUsers));
        assert!(!role_has_capability(Some(Role::Manager), Capability::ManageUsers));
        assert!(!role_has_capability(Some(Role::User), Capability::ManageUsers));
    }

    #[test]
    fn test_manage_roles() {
        assert!(role_has_capability(Some(Role::SuperAdmin), Capability::ManageRoles));
        assert!(!role_has_capability(Some(Role::Admin), Capability::ManageRoles));
    }

    #[test]
    fn test_no_role_has_nothing() {
        assert!(!role_has_capability(None, Capability::ManageUsers));
        assert!(!role_has_capability(None, Capability::ManageRoles));
    }

    #[test]
    fn test_require_capability_messages() {
        assert!(require_capability(Some(Role::Admin), Capability::ManageUsers, "Add user").is_ok());

        let err = require_capability(Some(Role::Admin), Capability::ManageRoles, "Add role")
            .unwrap_err();
        assert!(err.is_permission_denied());
        assert_eq!(
            err.message(),
            "Add role requires role management, which ADMIN does not have"
        );

        let err = require_capability(None, Capability::ManageUsers, "Remove user").unwrap_err();
        assert_eq!(
            err.message(),
            "Remove user requires an authenticated session"
        );
    }
}
