//! # Rampart Core
//!
//! Foundation types shared by every Rampart crate:
//!
//! - [`Role`]: the closed catalog of access levels
//! - [`Identity`]: the profile of the currently authenticated user
//! - [`RecordId`]: string identifiers for registry records
//! - [`RampartError`]: the unified error type
//!
//! Nothing in this crate holds state. Session handling lives in
//! `rampart-authentication`, route decisions in `rampart-authorization`.

pub mod errors;
pub mod identifiers;
pub mod identity;
pub mod role;

pub use errors::{RampartError, Result};
pub use identifiers::RecordId;
pub use identity::Identity;
pub use role::{ParseRoleError, Role};
