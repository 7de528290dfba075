//! Categorized application errors
//!
//! Every failed intent becomes a [`Notice`]: a blocking message the user must
//! acknowledge before the next action. Categories let frontends pick wording
//! and emphasis without matching on concrete error types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// High-level error categories for frontend error handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// User input validation errors (correctable by user)
    Input,
    /// Authorization/capability errors
    Capability,
    /// Resource not found
    NotFound,
    /// General operation failures (catch-all)
    Operation,
}

impl ErrorCategory {
    /// Get a short label for this category.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Input => "Input",
            Self::Capability => "Permission",
            Self::NotFound => "Not Found",
            Self::Operation => "Operation",
        }
    }

    /// Get a hint for the user on how to resolve this category of error.
    #[must_use]
    pub fn resolution_hint(&self) -> &'static str {
        match self {
            Self::Input => "Check your input and try again",
            Self::Capability => "This action requires additional permissions",
            Self::NotFound => "The requested resource could not be found",
            Self::Operation => "An unexpected error occurred",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A blocking message awaiting acknowledgment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Error category
    pub category: ErrorCategory,
    /// User-facing message
    pub message: String,
}

impl Notice {
    /// Create a notice.
    pub fn new(category: ErrorCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.message)
    }
}
