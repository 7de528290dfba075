//! Dashboard welcome card.

use rampart_core::{Identity, Role};
use serde::Serialize;

/// Welcome card for the logged-in identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    /// "Welcome, {name}"
    pub greeting: String,
    /// Avatar letter
    pub initial: Option<char>,
    /// Role of the identity
    pub role: Role,
    /// Contact email
    pub email: String,
}

impl DashboardView {
    /// Card for `identity`.
    pub fn for_identity(identity: &Identity) -> Self {
        Self {
            greeting: format!("Welcome, {}", identity.name),
            initial: identity.initial(),
            role: identity.role,
            email: identity.email.clone(),
        }
    }
}
