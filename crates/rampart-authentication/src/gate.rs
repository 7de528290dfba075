//! # Authentication Gate
//!
//! Login and logout against an explicit [`Session`].

use crate::{AuthenticationError, Credentials, IdentityResolver, MockDirectory, Result, Session};
use rampart_core::{Identity, Role};
use tracing::{debug, info};

/// Runs login/logout through a pluggable resolver.
pub struct AuthenticationGate {
    resolver: Box<dyn IdentityResolver>,
}

impl AuthenticationGate {
    /// Gate over the given resolver.
    pub fn new(resolver: impl IdentityResolver + 'static) -> Self {
        Self {
            resolver: Box::new(resolver),
        }
    }

    /// Gate over the stock [`MockDirectory`].
    pub fn with_mock_directory() -> Self {
        Self::new(MockDirectory::new())
    }

    /// Name of the active resolver.
    pub fn resolver_name(&self) -> &str {
        self.resolver.name()
    }

    /// Log in with a raw role selection.
    ///
    /// A selection outside the catalog fails with
    /// [`AuthenticationError::UnknownRole`] and leaves the session untouched.
    pub fn login<'s>(&self, session: &'s mut Session, selection: &str) -> Result<&'s Identity> {
        let role = selection.parse::<Role>().map_err(AuthenticationError::from)?;
        self.login_as(session, role)
    }

    /// Log in as a catalog role.
    pub fn login_as<'s>(&self, session: &'s mut Session, role: Role) -> Result<&'s Identity> {
        let identity = self.resolver.resolve(&Credentials::for_role(role))?;
        info!(
            resolver = self.resolver.name(),
            role = %identity.role,
            id = %identity.id,
            "login"
        );
        if let Some(previous) = session.install(identity) {
            debug!(previous = %previous.id, "replaced live identity");
        }
        session
            .identity()
            .ok_or(AuthenticationError::NotInDirectory(role))
    }

    /// Clear the session. Always succeeds; returns the identity that was live.
    pub fn logout(&self, session: &mut Session) -> Option<Identity> {
        let previous = session.clear();
        if let Some(identity) = &previous {
            info!(role = %identity.role, id = %identity.id, "logout");
        }
        previous
    }
}

impl Default for AuthenticationGate {
    fn default() -> Self {
        Self::with_mock_directory()
    }
}

impl std::fmt::Debug for AuthenticationGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticationGate")
            .field("resolver", &self.resolver.name())
            .finish()
    }
}
