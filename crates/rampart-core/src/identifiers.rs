//! Record identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a registry record or directory identity.
///
/// Identifiers are decimal strings ("1", "2", ...). They are compared as
/// strings; nothing guarantees global uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Wrap an existing identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier for a 1-based sequence number.
    pub fn from_seq(seq: u64) -> Self {
        Self(seq.to_string())
    }

    /// Borrow the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value, if the identifier is a decimal sequence number.
    pub fn seq(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
