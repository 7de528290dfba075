//! Navigation menu.

use rampart_authorization::Route;
use rampart_core::Role;
use serde::Serialize;

/// One sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    /// Display label
    pub label: &'static str,
    /// Target route
    pub route: Route,
}

impl MenuEntry {
    fn to(route: Route) -> Self {
        Self {
            label: route.title(),
            route,
        }
    }

    /// Target path.
    pub fn path(&self) -> &'static str {
        self.route.path()
    }
}

/// Visible entries for a role, in display order. Without a role only the
/// dashboard is listed.
pub fn build_menu(role: Option<Role>) -> Vec<MenuEntry> {
    let extra: &[Route] = match role {
        Some(Role::SuperAdmin) => &[Route::Users, Route::Roles],
        Some(Role::Admin) => &[Route::Users],
        Some(Role::Manager) => &[Route::Team],
        Some(Role::User) | None => &[],
    };
    std::iter::once(Route::Dashboard)
        .chain(extra.iter().copied())
        .map(MenuEntry::to)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(role: Option<Role>) -> Vec<&'static str> {
        build_menu(role).iter().map(|e| e.label).collect()
    }

    #[test]
    fn test_menu_table() {
        assert_eq!(
            labels(Some(Role::SuperAdmin)),
            ["Dashboard", "User Management", "Role Management"]
        );
        assert_eq!(labels(Some(Role::Admin)), ["Dashboard", "User Management"]);
        assert_eq!(labels(Some(Role::Manager)), ["Dashboard", "Team View"]);
        assert_eq!(labels(Some(Role::User)), ["Dashboard"]);
        assert_eq!(labels(None), ["Dashboard"]);
    }

    #[test]
    fn test_menu_paths() {
        let paths: Vec<_> = build_menu(Some(Role::SuperAdmin))
            .iter()
            .map(MenuEntry::path)
            .collect();
        assert_eq!(paths, ["/dashboard", "/users", "/roles"]);
    }

    #[test]
    fn test_menu_entries_pass_the_guard() {
        use rampart_authorization::authorize_route;
        use rampart_core::Identity;

        for role in Role::all() {
            let identity = Identity::new("1", "T", "t@example.com", role);
            for entry in build_menu(Some(role)) {
                assert!(authorize_route(Some(&identity), entry.route).is_allowed());
            }
        }
    }
}
