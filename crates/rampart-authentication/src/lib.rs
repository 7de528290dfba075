//! Rampart Authentication
//!
//! Establishes WHO is using the console:
//! - [`Session`] holds at most one [`Identity`](rampart_core::Identity)
//! - [`IdentityResolver`] turns credentials into an identity
//! - [`AuthenticationGate`] runs login/logout against an explicit session
//!
//! Authentication knows nothing about routes or capabilities; those belong to
//! `rampart-authorization`. The bundled [`MockDirectory`] resolves role
//! selections without checking any secret. A real credential check replaces
//! the resolver, not the gate.

pub mod gate;
pub mod resolver;
pub mod session;

pub use gate::AuthenticationGate;
pub use resolver::{Credentials, IdentityResolver, MockDirectory};
pub use session::Session;

use rampart_core::{RampartError, Role};

/// Authentication errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthenticationError {
    /// The selection is not a catalog role
    #[error("Unrecognized role: {0:?}")]
    UnknownRole(String),

    /// The resolver has no identity for this role
    #[error("No identity registered for role {0}")]
    NotInDirectory(Role),
}

impl From<rampart_core::ParseRoleError> for AuthenticationError {
    fn from(err: rampart_core::ParseRoleError) -> Self {
        Self::UnknownRole(err.input)
    }
}

impl From<AuthenticationError> for RampartError {
    fn from(err: AuthenticationError) -> Self {
        match err {
            AuthenticationError::UnknownRole(_) => RampartError::invalid(err.to_string()),
            AuthenticationError::NotInDirectory(_) => RampartError::not_found(err.to_string()),
        }
    }
}

/// Result alias over [`AuthenticationError`]
pub type Result<T> = std::result::Result<T, AuthenticationError>;
