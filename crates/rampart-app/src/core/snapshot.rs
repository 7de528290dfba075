//! Serializable state snapshot for debugging and JSON output.

use crate::errors::Notice;
use crate::views::{MenuEntry, RoleRecord, UserRecord};
use rampart_authorization::Route;
use rampart_core::Identity;
use serde::Serialize;

/// Point-in-time copy of everything a frontend renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateSnapshot {
    /// Logged-in identity
    pub identity: Option<Identity>,
    /// Current route
    pub route: Route,
    /// Sidebar entries; empty when logged out
    pub menu: Vec<MenuEntry>,
    /// Users in display order
    pub users: Vec<UserRecord>,
    /// Roles in display order
    pub roles: Vec<RoleRecord>,
    /// Pending notice
    pub notice: Option<Notice>,
}

impl StateSnapshot {
    /// Pretty JSON rendering.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
