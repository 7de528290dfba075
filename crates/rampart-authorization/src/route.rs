//! # Route Table
//!
//! Navigable destinations and the constraint guarding each.
//!
//! | Route | Constraint |
//! |---|---|
//! | `/login` | public |
//! | `/dashboard` | any authenticated identity |
//! | `/users` | SUPERADMIN or ADMIN |
//! | `/roles` | SUPERADMIN |
//! | `/team` | MANAGER |
//!
//! Any other path resolves to `/login`.

use crate::RouteConstraint;
use rampart_core::Role;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Navigable destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// Role selection
    Login,
    /// Welcome card for the live identity
    Dashboard,
    /// User management
    Users,
    /// Role management
    Roles,
    /// Read-only team listing
    Team,
}

impl Route {
    /// All routes in table order.
    pub const ALL: [Route; 5] = [
        Route::Login,
        Route::Dashboard,
        Route::Users,
        Route::Roles,
        Route::Team,
    ];

    /// URL path of this route.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::Users => "/users",
            Self::Roles => "/roles",
            Self::Team => "/team",
        }
    }

    /// Exact path lookup. Use [`resolve_path`] for catch-all behavior.
    pub fn from_path(path: &str) -> Option<Route> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Guard for this route; `None` means public.
    pub fn constraint(&self) -> Option<RouteConstraint> {
        match self {
            Self::Login => None,
            Self::Dashboard => Some(RouteConstraint::Unconstrained),
            Self::Users => Some(RouteConstraint::any_of([Role::SuperAdmin, Role::Admin])),
            Self::Roles => Some(RouteConstraint::Role(Role::SuperAdmin)),
            Self::Team => Some(RouteConstraint::Role(Role::Manager)),
        }
    }

    /// Whether the route has no constraint at all.
    pub fn is_public(&self) -> bool {
        self.constraint().is_none()
    }

    /// Page title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Dashboard => "Dashboard",
            Self::Users => "User Management",
            Self::Roles => "Role Management",
            Self::Team => "Team View",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Path outside the route table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no route for path {0:?}")]
pub struct ParseRouteError(pub String);

impl FromStr for Route {
    type Err = ParseRouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::from_path(s).ok_or_else(|| ParseRouteError(s.to_string()))
    }
}

/// Resolve a path, sending unknown paths to the catch-all (`/login`).
pub fn resolve_path(path: &str) -> Route {
    Route::from_path(path).unwrap_or(Route::Login)
}
