//! Intent dispatch errors.

use crate::errors::{ErrorCategory, Notice};
use crate::views::ValidationError;
use rampart_authentication::AuthenticationError;
use rampart_core::RampartError;
use thiserror::Error;

/// Why an intent was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntentError {
    /// Login selection could not be resolved
    #[error("Login failed: {0}")]
    Authentication(#[from] AuthenticationError),

    /// Draft rejected by the registry
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The current role may not perform this action
    #[error(transparent)]
    Denied(#[from] RampartError),

    /// An earlier notice has not been acknowledged
    #[error("Acknowledge the pending notice first")]
    NoticePending,
}

impl IntentError {
    /// Category used for the notice.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Authentication(AuthenticationError::NotInDirectory(_)) => ErrorCategory::NotFound,
            Self::Authentication(_) | Self::Validation(_) => ErrorCategory::Input,
            Self::Denied(err) if err.is_permission_denied() => ErrorCategory::Capability,
            Self::Denied(_) | Self::NoticePending => ErrorCategory::Operation,
        }
    }

    /// Notice shown for this error. Login failures read "Login failed"
    /// without detail.
    pub fn to_notice(&self) -> Notice {
        let message = match self {
            Self::Authentication(_) => "Login failed".to_string(),
            other => other.to_string(),
        };
        Notice::new(self.category(), message)
    }
}
