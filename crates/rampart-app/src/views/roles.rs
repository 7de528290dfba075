//! # Roles Registry
//!
//! Role records describe access levels for display and administration. Role
//! names are unique case-insensitively at creation time.
//!
//! Names are compared and stored trimmed: `"ADMIN "` collides with `ADMIN`.

use super::registry::{IdAssignment, Registry, RegistryRecord};
use super::validation::{is_blank, Field, ValidationError};
use indexmap::IndexSet;
use rampart_core::{RecordId, Role};
use serde::{Deserialize, Serialize};

/// Permissions offered when creating a role.
pub const PERMISSION_OPTIONS: [&str; 5] = [
    "USER_MANAGEMENT",
    "ROLE_MANAGEMENT",
    "TEAM_VIEW",
    "TEAM_MANAGEMENT",
    "DASHBOARD_ACCESS",
];

/// Wildcard permission carried by the seeded SUPERADMIN row.
pub const ALL_PERMISSIONS: &str = "ALL";

/// A managed role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRecord {
    /// Registry identifier
    pub id: RecordId,
    /// Unique name, case-insensitively
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Insertion-ordered, no duplicates
    pub permissions: IndexSet<String>,
}

impl RegistryRecord for RoleRecord {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// Input for a new role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDraft {
    /// Role name
    pub name: String,
    /// Role description
    pub description: String,
    /// Selected permissions, in selection order
    pub permissions: IndexSet<String>,
}

impl RoleDraft {
    /// Draft with no permissions selected.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            permissions: IndexSet::new(),
        }
    }

    /// Builder form of adding a permission.
    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        self.permissions.insert(permission.into());
        self
    }

    /// Select `permission` if unselected, otherwise deselect it. Remaining
    /// permissions keep their order.
    pub fn toggle_permission(&mut self, permission: &str) {
        if !self.permissions.shift_remove(permission) {
            self.permissions.insert(permission.to_string());
        }
    }
}

/// The roles registry.
#[derive(Debug, Clone)]
pub struct RolesRegistry {
    registry: Registry<RoleRecord>,
}

impl RolesRegistry {
    /// One row per catalog role.
    pub fn seeded(assignment: IdAssignment) -> Self {
        let seed = [
            (
                "1",
                Role::SuperAdmin,
                "Full system access, can manage users and roles",
                &[ALL_PERMISSIONS][..],
            ),
            (
                "2",
                Role::Admin,
                "Can manage users within their organization",
                &["USER_MANAGEMENT"][..],
            ),
            (
                "3",
                Role::Manager,
                "Can view and manage team members",
                &["TEAM_VIEW", "TEAM_MANAGEMENT"][..],
            ),
            (
                "4",
                Role::User,
                "Standard user with limited access",
                &["DASHBOARD_ACCESS"][..],
            ),
        ]
        .into_iter()
        .map(|(id, role, description, permissions)| RoleRecord {
            id: id.into(),
            name: role.as_str().to_string(),
            description: description.to_string(),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
        })
        .collect();
        Self {
            registry: Registry::seeded(seed, assignment),
        }
    }

    /// Whether a role with this name exists, ignoring case.
    pub fn has_name(&self, name: &str) -> bool {
        let wanted = name.trim().to_lowercase();
        self.registry
            .iter()
            .any(|r| r.name.trim().to_lowercase() == wanted)
    }

    /// Validate and append.
    ///
    /// Checks run in order: name, description, permissions, name collision.
    pub fn add(&mut self, draft: RoleDraft) -> Result<RoleRecord, ValidationError> {
        if is_blank(&draft.name) {
            return Err(ValidationError::MissingField(Field::RoleName));
        }
        if is_blank(&draft.description) {
            return Err(ValidationError::MissingField(Field::RoleDescription));
        }
        if draft.permissions.is_empty() {
            return Err(ValidationError::NoPermissions);
        }
        if self.has_name(&draft.name) {
            return Err(ValidationError::DuplicateRoleName(
                draft.name.trim().to_string(),
            ));
        }
        let record = self.registry.append_with(|id| RoleRecord {
            id,
            name: draft.name.trim().to_string(),
            description: draft.description.trim().to_string(),
            permissions: draft.permissions,
        });
        Ok(record.clone())
    }

    /// Remove by id; a missing id changes nothing.
    pub fn remove(&mut self, id: &RecordId) -> Vec<RoleRecord> {
        self.registry.remove(id)
    }

    /// First role with this id.
    pub fn get(&self, id: &RecordId) -> Option<&RoleRecord> {
        self.registry.get(id)
    }

    /// Roles in display order.
    pub fn all(&self) -> &[RoleRecord] {
        self.registry.all()
    }

    /// Number of roles.
    pub fn count(&self) -> usize {
        self.registry.count()
    }

    /// Identifier the next role will receive.
    pub fn next_id(&self) -> RecordId {
        self.registry.next_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> RolesRegistry {
        RolesRegistry::seeded(IdAssignment::Monotonic)
    }

    #[test]
    fn test_seed_rows() {
        let roles = seeded();
        let names: Vec<_> = roles.all().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["SUPERADMIN", "ADMIN", "MANAGER", "USER"]);
        let manager = roles.get(&"3".into()).unwrap();
        assert_eq!(
            manager.permissions.iter().collect::<Vec<_>>(),
            ["TEAM_VIEW", "TEAM_MANAGEMENT"]
        );
    }

    #[test]
    fn test_add_appends_last() {
        let mut roles = seeded();
        let record = roles
            .add(RoleDraft::new("ops", "d").with_permission("TEAM_VIEW"))
            .unwrap();
        assert_eq!(roles.count(), 5);
        assert_eq!(roles.all().last(), Some(&record));
        assert_eq!(record.id.as_str(), "5");
    }

    #[test]
    fn test_duplicate_name_ignores_case() {
        let mut roles = seeded();
        let err = roles
            .add(RoleDraft::new("admin", "dup").with_permission("TEAM_VIEW"))
            .unwrap_err();
        assert_eq!(err, ValidationError::DuplicateRoleName("admin".into()));
        assert_eq!(roles.count(), 4);
    }

    #[test]
    fn test_padded_name_collides_with_seed() {
        let mut roles = seeded();
        let err = roles
            .add(RoleDraft::new("ADMIN ", "dup").with_permission("TEAM_VIEW"))
            .unwrap_err();
        assert_eq!(err, ValidationError::DuplicateRoleName("ADMIN".into()));
    }

    #[test]
    fn test_validation_order() {
        let mut roles = seeded();
        assert_eq!(
            roles.add(RoleDraft::default()),
            Err(ValidationError::MissingField(Field::RoleName))
        );
        assert_eq!(
            roles.add(RoleDraft::new("ADMIN", "")),
            Err(ValidationError::MissingField(Field::RoleDescription))
        );
        // duplicate name is only reported once the other checks pass
        assert_eq!(
            roles.add(RoleDraft::new("ADMIN", "again")),
            Err(ValidationError::NoPermissions)
        );
        assert_eq!(roles.count(), 4);
    }

    #[test]
    fn test_name_freed_after_removal() {
        let mut roles = seeded();
        roles.remove(&"4".into());
        assert!(!roles.has_name("user"));
        roles
            .add(RoleDraft::new("User", "back").with_permission("DASHBOARD_ACCESS"))
            .unwrap();
    }

    #[test]
    fn test_toggle_permission_keeps_order() {
        let mut draft = RoleDraft::new("qa", "testers");
        draft.toggle_permission("TEAM_VIEW");
        draft.toggle_permission("DASHBOARD_ACCESS");
        draft.toggle_permission("USER_MANAGEMENT");
        draft.toggle_permission("DASHBOARD_ACCESS");
        assert_eq!(
            draft.permissions.iter().collect::<Vec<_>>(),
            ["TEAM_VIEW", "USER_MANAGEMENT"]
        );
    }
}
