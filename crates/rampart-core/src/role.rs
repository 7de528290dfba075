//! # Role Catalog
//!
//! The fixed set of access levels. Roles are defined at compile time and are
//! never created or destroyed at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Access level determining navigation and mutation rights.
///
/// Declaration order runs from most to least privileged; `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Full system access, manages users and roles
    SuperAdmin,
    /// Manages users
    Admin,
    /// Views the team
    Manager,
    /// Dashboard only
    User,
}

impl Role {
    /// All roles in catalog order.
    pub const ALL: [Role; 4] = [Role::SuperAdmin, Role::Admin, Role::Manager, Role::User];

    /// Canonical identifier, as shown to users and accepted by [`Role::from_str`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "SUPERADMIN",
            Self::Admin => "ADMIN",
            Self::Manager => "MANAGER",
            Self::User => "USER",
        }
    }

    /// Iterate over the catalog.
    pub fn all() -> impl Iterator<Item = Role> {
        Self::ALL.into_iter()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role selection outside the closed catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized role: {input:?}")]
pub struct ParseRoleError {
    /// The rejected input, verbatim
    pub input: String,
}

impl FromStr for Role {
    type Err = ParseRoleError;

    /// Identifiers match exactly; `"admin"` is not `ADMIN`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::all()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ParseRoleError {
                input: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_identifier() {
        for role in Role::all() {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
            assert_eq!(role.to_string(), role.as_str());
        }
    }

    #[test]
    fn test_parse_rejects_unknown_and_lowercase() {
        assert!("GUEST".parse::<Role>().is_err());
        assert!("admin".parse::<Role>().is_err());
        let err = "".parse::<Role>().unwrap_err();
        assert_eq!(err.input, "");
    }

    #[test]
    fn test_catalog_order() {
        assert_eq!(
            Role::all().collect::<Vec<_>>(),
            vec![Role::SuperAdmin, Role::Admin, Role::Manager, Role::User]
        );
        assert!(Role::SuperAdmin < Role::User);
    }

    #[test]
    fn test_serde_uses_identifier() {
        let json = serde_json::to_string(&Role::SuperAdmin).unwrap();
        assert_eq!(json, "\"SUPERADMIN\"");
        let back: Role = serde_json::from_str("\"MANAGER\"").unwrap();
        assert_eq!(back, Role::Manager);
    }
}
