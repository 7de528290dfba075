//! Rampart Authorization
//!
//! Decides WHAT the current identity may reach and change:
//! - [`Route`] and its [`RouteConstraint`]: the static route table
//! - [`authorize`]: the guard evaluated on every navigation
//! - [`Capability`]: registry mutation rights checked at the calling boundary
//!
//! Everything here is a pure function of an identity (or its absence) and a
//! static table. No state is held.

pub mod capability;
pub mod constraint;
pub mod guard;
pub mod route;

pub use capability::{require_capability, role_has_capability, Capability};
pub use constraint::RouteConstraint;
pub use guard::{authorize, authorize_route, Decision};
pub use route::{resolve_path, ParseRouteError, Route};
