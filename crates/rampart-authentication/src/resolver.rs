//! Identity resolution.
//!
//! The gate hands [`Credentials`] to an [`IdentityResolver`] and installs
//! whatever identity comes back. [`MockDirectory`] is the fixed directory of
//! one canned identity per role.

use crate::{AuthenticationError, Result};
use rampart_core::{Identity, Role};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What the user submitted at login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Selected role
    pub role: Role,
}

impl Credentials {
    /// Credentials for a role selection.
    pub fn for_role(role: Role) -> Self {
        Self { role }
    }
}

/// Turns credentials into an identity.
///
/// Implementations must be deterministic for a given input; the gate does not
/// retry.
pub trait IdentityResolver: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Resolve credentials to an identity.
    fn resolve(&self, credentials: &Credentials) -> Result<Identity>;
}

/// Fixed directory with one identity per role.
#[derive(Debug, Clone)]
pub struct MockDirectory {
    entries: BTreeMap<Role, Identity>,
}

impl MockDirectory {
    /// The stock directory covering every catalog role.
    pub fn new() -> Self {
        Self::from_identities([
            Identity::new(
                "1",
                "Super Admin",
                "superadmin@example.com",
                Role::SuperAdmin,
            ),
            Identity::new("2", "Admin", "admin@example.com", Role::Admin),
            Identity::new("3", "Manager", "manager@example.com", Role::Manager),
            Identity::new("4", "Regular User", "user@example.com", Role::User),
        ])
    }

    /// A directory over arbitrary identities. A later identity with the same
    /// role replaces an earlier one.
    pub fn from_identities(identities: impl IntoIterator<Item = Identity>) -> Self {
        Self {
            entries: identities.into_iter().map(|i| (i.role, i)).collect(),
        }
    }

    /// Look up the canned identity for a role.
    pub fn get(&self, role: Role) -> Option<&Identity> {
        self.entries.get(&role)
    }

    /// Number of roles with an identity.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MockDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityResolver for MockDirectory {
    fn name(&self) -> &str {
        "mock-directory"
    }

    fn resolve(&self, credentials: &Credentials) -> Result<Identity> {
        self.get(credentials.role)
            .cloned()
            .ok_or(AuthenticationError::NotInDirectory(credentials.role))
    }
}
