//! # Route Authorization Guard
//!
//! Evaluated synchronously on every navigation:
//!
//! ```text
//! identity absent            -> RedirectTo(/login)
//! constraint admits role     -> Allow
//! otherwise                  -> RedirectTo(/dashboard)
//! ```

use crate::{Route, RouteConstraint};
use rampart_core::Identity;
use serde::{Deserialize, Serialize};

/// Outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", content = "target", rename_all = "snake_case")]
pub enum Decision {
    /// Proceed to the requested route
    Allow,
    /// Navigate here instead
    RedirectTo(Route),
}

impl Decision {
    /// Whether navigation proceeds as requested.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Where navigation ends up when `requested` was asked for.
    pub fn landing(&self, requested: Route) -> Route {
        match self {
            Self::Allow => requested,
            Self::RedirectTo(target) => *target,
        }
    }
}

/// Check an identity against a constraint.
pub fn authorize(identity: Option<&Identity>, constraint: &RouteConstraint) -> Decision {
    let Some(identity) = identity else {
        return Decision::RedirectTo(Route::Login);
    };
    if constraint.admits(identity.role) {
        Decision::Allow
    } else {
        Decision::RedirectTo(Route::Dashboard)
    }
}

/// Check an identity against a route, letting public routes through.
///
/// Redirect targets are always reachable by the same identity: `/login` is
/// public and `/dashboard` admits any authenticated identity.
pub fn authorize_route(identity: Option<&Identity>, route: Route) -> Decision {
    match route.constraint() {
        None => Decision::Allow,
        Some(constraint) => authorize(identity, &constraint),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rampart_core::Role;

    fn identity(role: Role) -> Identity {
        Identity::new("1", "Test", "test@example.com", role)
    }

    #[test]
    fn test_absent_identity_redirects_to_login() {
        assert_eq!(
            authorize(None, &RouteConstraint::Unconstrained),
            Decision::RedirectTo(Route::Login)
        );
        assert_eq!(
            authorize_route(None, Route::Team),
            Decision::RedirectTo(Route::Login)
        );
    }

    #[test]
    fn test_login_is_public() {
        assert_eq!(authorize_route(None, Route::Login), Decision::Allow);
        assert_eq!(
            authorize_route(Some(&identity(Role::User)), Route::Login),
            Decision::Allow
        );
    }

    #[test]
    fn test_route_table_per_role() {
        let cases = [
            (Role::SuperAdmin, Route::Users, true),
            (Role::SuperAdmin, Route::Roles, true),
            (Role::SuperAdmin, Route::Team, false),
            (Role::Admin, Route::Users, true),
            (Role::Admin, Route::Roles, false),
            (Role::Manager, Route::Team, true),
            (Role::Manager, Route::Users, false),
            (Role::User, Route::Dashboard, true),
            (Role::User, Route::Users, false),
        ];
        for (role, route, allowed) in cases {
            let decision = authorize_route(Some(&identity(role)), route);
            assert_eq!(decision.is_allowed(), allowed, "{role} -> {route}");
            if !allowed {
                assert_eq!(decision, Decision::RedirectTo(Route::Dashboard));
            }
        }
    }

    #[test]
    fn test_landing() {
        assert_eq!(Decision::Allow.landing(Route::Team), Route::Team);
        assert_eq!(
            Decision::RedirectTo(Route::Dashboard).landing(Route::Team),
            Route::Dashboard
        );
    }
}
