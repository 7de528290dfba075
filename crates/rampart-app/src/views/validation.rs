//! Create-time validation errors for registry drafts.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A required draft field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    /// User display name
    UserName,
    /// User email
    UserEmail,
    /// Role name
    RoleName,
    /// Role description
    RoleDescription,
}

impl Field {
    /// Label used in messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::UserName => "Name",
            Self::UserEmail => "Email",
            Self::RoleName => "Role name",
            Self::RoleDescription => "Role description",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a draft was rejected. The registry is unchanged after any of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Blank required field
    #[error("{0} is required")]
    MissingField(Field),

    /// Email does not look like `local@domain.tld`
    #[error("Please enter a valid email address")]
    MalformedEmail(String),

    /// Role draft with an empty permission set
    #[error("At least one permission must be selected")]
    NoPermissions,

    /// Another role already has this name
    #[error("Role name {0:?} already exists")]
    DuplicateRoleName(String),
}

#[allow(clippy::expect_used)] // literal pattern
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// `local@domain.tld` with no whitespace and a single `@`.
pub(crate) fn is_email_shaped(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Empty after trimming.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape() {
        assert!(is_email_shaped("a@b.co"));
        assert!(is_email_shaped("first.last@sub.example.com"));
        assert!(!is_email_shaped("a@b"));
        assert!(!is_email_shaped("a b@c.d"));
        assert!(!is_email_shaped("a@@b.c"));
        assert!(!is_email_shaped("@b.c"));
        assert!(!is_email_shaped(""));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::MissingField(Field::RoleName).to_string(),
            "Role name is required"
        );
        assert_eq!(
            ValidationError::NoPermissions.to_string(),
            "At least one permission must be selected"
        );
    }
}
