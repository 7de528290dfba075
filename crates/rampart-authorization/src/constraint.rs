//! Role requirement attached to a route.

use rampart_core::Role;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Which roles may pass a guarded route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "roles", rename_all = "snake_case")]
pub enum RouteConstraint {
    /// Any authenticated identity
    Unconstrained,
    /// Exactly this role
    Role(Role),
    /// Any role in the set
    AnyOf(BTreeSet<Role>),
}

impl RouteConstraint {
    /// Constraint admitting any of `roles`.
    pub fn any_of(roles: impl IntoIterator<Item = Role>) -> Self {
        Self::AnyOf(roles.into_iter().collect())
    }

    /// Whether `role` satisfies this constraint.
    pub fn admits(&self, role: Role) -> bool {
        match self {
            Self::Unconstrained => true,
            Self::Role(required) => *required == role,
            Self::AnyOf(roles) => roles.contains(&role),
        }
    }
}

impl fmt::Display for RouteConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unconstrained => write!(f, "any authenticated"),
            Self::Role(role) => write!(f, "{role}"),
            Self::AnyOf(roles) => {
                let names: Vec<&str> = roles.iter().map(Role::as_str).collect();
                write!(f, "{{{}}}", names.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admits() {
        assert!(RouteConstraint::Unconstrained.admits(Role::User));
        assert!(RouteConstraint::Role(Role::Manager).admits(Role::Manager));
        assert!(!RouteConstraint::Role(Role::Manager).admits(Role::SuperAdmin));

        let staff = RouteConstraint::any_of([Role::SuperAdmin, Role::Admin]);
        assert!(staff.admits(Role::Admin));
        assert!(!staff.admits(Role::Manager));
        assert!(!RouteConstraint::any_of([]).admits(Role::SuperAdmin));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            RouteConstraint::any_of([Role::Admin, Role::SuperAdmin]).to_string(),
            "{SUPERADMIN, ADMIN}"
        );
        assert_eq!(RouteConstraint::Role(Role::Manager).to_string(), "MANAGER");
    }
}
