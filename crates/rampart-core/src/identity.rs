//! Authenticated identity.

use crate::{RecordId, Role};
use serde::{Deserialize, Serialize};

/// Profile of the authenticated user.
///
/// Identities are produced by an identity resolver at login and owned by the
/// session until logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Directory identifier
    pub id: RecordId,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Access level
    pub role: Role,
}

impl Identity {
    /// Create a new identity.
    pub fn new(
        id: impl Into<RecordId>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
        }
    }

    /// First character of the display name, used for avatars.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}
