//! # View State Module
//!
//! Domain state and the read-side projections frontends render:
//!
//! - [`Registry`]: ordered, append/remove-only record collection
//! - [`UsersRegistry`] / [`RolesRegistry`]: seeded registries with validation
//! - [`build_menu`]: role-keyed navigation entries
//! - [`DashboardView`]: the welcome card

mod dashboard;
mod menu;
mod registry;
mod roles;
mod users;
mod validation;

pub use dashboard::DashboardView;
pub use menu::{build_menu, MenuEntry};
pub use registry::{IdAssignment, Registry, RegistryRecord};
pub use roles::{RoleDraft, RoleRecord, RolesRegistry, ALL_PERMISSIONS, PERMISSION_OPTIONS};
pub use users::{UserDraft, UserListing, UserRecord, UsersRegistry};
pub use validation::{Field, ValidationError};
