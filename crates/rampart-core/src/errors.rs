//! Unified error system for Rampart core
//!
//! A single error enum with constructor helpers. Crates with richer failure
//! modes define their own errors and convert into this one at boundaries.

use serde::{Deserialize, Serialize};

/// Unified error type for Rampart operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum RampartError {
    /// Invalid input
    #[error("Invalid: {message}")]
    Invalid {
        /// Error message describing the invalid input
        message: String,
    },

    /// Resource not found
    #[error("Not found: {message}")]
    NotFound {
        /// Error message describing what was not found
        message: String,
    },

    /// Permission denied
    #[error("Permission denied: {message}")]
    PermissionDenied {
        /// Error message describing the permission issue
        message: String,
    },
}

impl RampartError {
    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::PermissionDenied {
            message: message.into(),
        }
    }

    /// The message without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Invalid { message }
            | Self::NotFound { message }
            | Self::PermissionDenied { message } => message,
        }
    }

    /// Whether this is a permission failure.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}

impl From<crate::ParseRoleError> for RampartError {
    fn from(err: crate::ParseRoleError) -> Self {
        Self::invalid(err.to_string())
    }
}

/// Result alias over [`RampartError`]
pub type Result<T> = std::result::Result<T, RampartError>;
