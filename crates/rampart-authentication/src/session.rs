//! Session state.

use rampart_core::{Identity, Role};
use serde::{Deserialize, Serialize};

/// Holds at most one authenticated identity.
///
/// A session is an ordinary value owned by the frontend and passed to the
/// components that read it. Only the [`AuthenticationGate`](crate::AuthenticationGate)
/// installs or clears the identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    identity: Option<Identity>,
}

impl Session {
    /// An unauthenticated session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The live identity, if any.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Role of the live identity.
    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(|i| i.role)
    }

    /// Whether an identity is installed.
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Replace the identity, returning the previous one.
    pub(crate) fn install(&mut self, identity: Identity) -> Option<Identity> {
        self.identity.replace(identity)
    }

    pub(crate) fn clear(&mut self) -> Option<Identity> {
        self.identity.take()
    }
}
