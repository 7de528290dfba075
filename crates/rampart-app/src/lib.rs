//! # Rampart App
//!
//! Portable headless core of the Rampart console. Frontends (the terminal
//! shell, tests) own an [`AppCore`], feed it [`Intent`]s and render its views.
//!
//! ```text
//! Intent → capability check → gate / registry → route guard → views
//! ```
//!
//! - [`core`]: `AppCore`, intents, snapshots
//! - [`views`]: registries, menu, dashboard
//! - [`errors`]: error categories and blocking notices

pub mod core;
pub mod errors;
pub mod views;

pub use crate::core::{AppConfig, AppCore, Intent, IntentError, Outcome, StateSnapshot};
pub use crate::errors::{ErrorCategory, Notice};
pub use crate::views::{
    build_menu, DashboardView, IdAssignment, MenuEntry, Registry, RegistryRecord, RoleDraft,
    RoleRecord, RolesRegistry, UserDraft, UserListing, UserRecord, UsersRegistry,
    ValidationError, PERMISSION_OPTIONS,
};

// Re-exported so frontends need only this crate
pub use rampart_authentication::{AuthenticationError, Session};
pub use rampart_authorization::{
    authorize_route, resolve_path, Capability, Decision, Route, RouteConstraint,
};
pub use rampart_core::{Identity, RampartError, RecordId, Role};
