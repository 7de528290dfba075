//! # Users Registry
//!
//! Seeded with one account per role. Email addresses are not checked for
//! duplicates.
//!
//! Name and email are trimmed before validation, so `" a@b.co"` is accepted
//! and stored as `"a@b.co"`.

use super::registry::{IdAssignment, Registry, RegistryRecord};
use super::validation::{is_blank, is_email_shaped, Field, ValidationError};
use rampart_core::{RecordId, Role};
use serde::{Deserialize, Serialize};

/// A managed user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Registry identifier
    pub id: RecordId,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Assigned role
    pub role: Role,
}

impl RegistryRecord for UserRecord {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// Input for a new user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    /// Display name
    pub name: String,
    /// Must look like an email address
    pub email: String,
    /// Assigned role; `USER` by default
    pub role: Role,
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: Role::User,
        }
    }
}

impl UserDraft {
    /// Draft with every field given.
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role,
        }
    }

    /// Check required fields, then the email shape.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if is_blank(&self.name) {
            return Err(ValidationError::MissingField(Field::UserName));
        }
        if is_blank(&self.email) {
            return Err(ValidationError::MissingField(Field::UserEmail));
        }
        let email = self.email.trim();
        if !is_email_shaped(email) {
            return Err(ValidationError::MalformedEmail(email.to_string()));
        }
        Ok(())
    }
}

/// Rows shown on the user screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserListing {
    /// Users in display order
    pub rows: Vec<UserRecord>,
    /// Whether add/delete controls are offered
    pub can_modify: bool,
}

/// The users registry.
#[derive(Debug, Clone)]
pub struct UsersRegistry {
    registry: Registry<UserRecord>,
}

impl UsersRegistry {
    /// The stock seed rows.
    pub fn seeded(assignment: IdAssignment) -> Self {
        let seed = [
            ("1", "Super Admin", "superadmin@example.com", Role::SuperAdmin),
            ("2", "Admin User", "admin@example.com", Role::Admin),
            ("3", "Manager User", "manager@example.com", Role::Manager),
            ("4", "Regular User", "user@example.com", Role::User),
        ]
        .into_iter()
        .map(|(id, name, email, role)| UserRecord {
            id: id.into(),
            name: name.to_string(),
            email: email.to_string(),
            role,
        })
        .collect();
        Self {
            registry: Registry::seeded(seed, assignment),
        }
    }

    /// Validate and append. Fields are stored trimmed.
    pub fn add(&mut self, draft: UserDraft) -> Result<UserRecord, ValidationError> {
        draft.validate()?;
        let record = self.registry.append_with(|id| UserRecord {
            id,
            name: draft.name.trim().to_string(),
            email: draft.email.trim().to_string(),
            role: draft.role,
        });
        Ok(record.clone())
    }

    /// Remove by id; a missing id changes nothing.
    pub fn remove(&mut self, id: &RecordId) -> Vec<UserRecord> {
        self.registry.remove(id)
    }

    /// First user with this id.
    pub fn get(&self, id: &RecordId) -> Option<&UserRecord> {
        self.registry.get(id)
    }

    /// Users in display order.
    pub fn all(&self) -> &[UserRecord] {
        self.registry.all()
    }

    /// Number of users.
    pub fn count(&self) -> usize {
        self.registry.count()
    }

    /// Identifier the next user will receive.
    pub fn next_id(&self) -> RecordId {
        self.registry.next_id()
    }

    /// Snapshot of the rows for rendering.
    pub fn listing(&self, can_modify: bool) -> UserListing {
        UserListing {
            rows: self.all().to_vec(),
            can_modify,
        }
    }
}
