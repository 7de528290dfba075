//! # Intents: User Actions
//!
//! Every user action reaches the core as an [`Intent`]. Intents are handled
//! one at a time and either succeed with an [`Outcome`] or fail with an
//! [`IntentError`](super::IntentError) that leaves a notice behind.

use crate::views::{RoleDraft, RoleRecord, UserDraft, UserRecord};
use rampart_authorization::Route;
use rampart_core::{Identity, RecordId};
use serde::{Deserialize, Serialize};

/// A user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// Log in with a role selection, as typed
    Login {
        /// Raw selection; anything outside the catalog fails
        role: String,
    },

    /// Log out
    Logout,

    /// Navigate to a path
    Navigate {
        /// Requested path; unknown paths fall through to `/login`
        path: String,
    },

    /// Create a user
    AddUser(UserDraft),

    /// Delete a user
    RemoveUser {
        /// Target id
        id: RecordId,
    },

    /// Create a role
    AddRole(RoleDraft),

    /// Delete a role
    RemoveRole {
        /// Target id
        id: RecordId,
    },
}

impl Intent {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Login { .. } => "login",
            Self::Logout => "logout",
            Self::Navigate { .. } => "navigate",
            Self::AddUser(_) => "add_user",
            Self::RemoveUser { .. } => "remove_user",
            Self::AddRole(_) => "add_role",
            Self::RemoveRole { .. } => "remove_role",
        }
    }

    /// Navigation intent.
    pub fn navigate(path: impl Into<String>) -> Self {
        Self::Navigate { path: path.into() }
    }

    /// Login intent for a raw role selection.
    pub fn login(role: impl Into<String>) -> Self {
        Self::Login { role: role.into() }
    }
}

/// Result of a successful intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// Session established
    LoggedIn {
        /// The new identity
        identity: Identity,
        /// Where the console ended up
        landed: Route,
    },
    /// Session cleared
    LoggedOut {
        /// Identity that was logged out
        previous: Option<Identity>,
        /// Where the console ended up
        landed: Route,
    },
    /// Guard ran for a navigation
    Navigated {
        /// Route resolved from the requested path
        requested: Route,
        /// Route after the guard
        landed: Route,
    },
    /// User appended
    UserAdded {
        /// The stored record
        record: UserRecord,
    },
    /// Empty when the id was not present
    UsersRemoved {
        /// Every record that had the id
        records: Vec<UserRecord>,
    },
    /// Role appended
    RoleAdded {
        /// The stored record
        record: RoleRecord,
    },
    /// Empty when the id was not present
    RolesRemoved {
        /// Every record that had the id
        records: Vec<RoleRecord>,
    },
}

impl Outcome {
    /// Whether navigation was diverted to another route.
    pub fn redirected(&self) -> bool {
        matches!(self, Self::Navigated { requested, landed } if requested != landed)
    }
}
