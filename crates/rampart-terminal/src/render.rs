//! Plain-text rendering of console views.

use rampart_app::{
    DashboardView, Decision, Identity, MenuEntry, Notice, Outcome, RoleRecord, Route, UserListing,
};

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Turns views into output lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    /// Renderer with or without ANSI emphasis.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Section heading.
    pub fn heading(&self, title: &str) -> String {
        if self.color {
            format!("{BOLD}{title}{RESET}")
        } else {
            title.to_string()
        }
    }

    /// One line per sidebar entry.
    pub fn menu(&self, entries: &[MenuEntry]) -> Vec<String> {
        entries
            .iter()
            .map(|entry| format!("  {:<16} {}", entry.label, entry.path()))
            .collect()
    }

    /// Welcome card.
    pub fn dashboard(&self, view: &DashboardView) -> Vec<String> {
        let initial = view.initial.map(String::from).unwrap_or_default();
        vec![
            self.heading(Route::Dashboard.title()),
            format!("  [{initial}] {}", view.greeting),
            format!("  Role:  {}", view.role),
            format!("  Email: {}", view.email),
        ]
    }

    /// The users table; `title` distinguishes `/users` from `/team`.
    pub fn users(&self, title: &str, listing: &UserListing) -> Vec<String> {
        let mut lines = vec![self.heading(title)];
        lines.push(format!("  {:<4} {:<20} {:<28} {}", "ID", "NAME", "EMAIL", "ROLE"));
        lines.extend(listing.rows.iter().map(|user| {
            format!(
                "  {:<4} {:<20} {:<28} {}",
                user.id, user.name, user.email, user.role
            )
        }));
        if !listing.can_modify {
            lines.push("  (read-only)".to_string());
        }
        lines
    }

    /// Roles table with permissions under each row.
    pub fn roles(&self, roles: &[RoleRecord], can_modify: bool) -> Vec<String> {
        let mut lines = vec![self.heading(Route::Roles.title())];
        for role in roles {
            let permissions: Vec<&str> = role.permissions.iter().map(String::as_str).collect();
            lines.push(format!("  {:<4} {:<12} {}", role.id, role.name, role.description));
            lines.push(format!("       permissions: {}", permissions.join(", ")));
        }
        if !can_modify {
            lines.push("  (read-only)".to_string());
        }
        lines
    }

    /// `whoami` line.
    pub fn identity(&self, identity: Option<&Identity>) -> String {
        match identity {
            Some(identity) => format!(
                "{} <{}> as {} (id {})",
                identity.name, identity.email, identity.role, identity.id
            ),
            None => "not logged in".to_string(),
        }
    }

    /// Route table with each route's constraint.
    pub fn routes(&self) -> Vec<String> {
        let mut lines = vec![self.heading("Routes")];
        lines.extend(Route::ALL.iter().map(|route| {
            let access = route
                .constraint()
                .map_or_else(|| "public".to_string(), |c| c.to_string());
            format!("  {:<12} {:<16} {}", route.path(), route.title(), access)
        }));
        lines
    }

    /// Guard result for `rampart check`.
    pub fn decision(&self, requested: &str, decision: &Decision, landed: Route) -> String {
        match decision {
            Decision::Allow if landed.path() == requested => format!("allow {requested}"),
            Decision::Allow => format!("allow {requested} -> {}", landed.path()),
            Decision::RedirectTo(target) => {
                format!("redirect {requested} -> {}", target.path())
            }
        }
    }

    /// Notice with its resolution hint.
    pub fn notice(&self, notice: &Notice) -> Vec<String> {
        vec![
            format!("! {notice}"),
            format!("  {} (type `ok` to continue)", notice.category.resolution_hint()),
        ]
    }

    /// One-line summary of a successful intent.
    pub fn outcome(&self, outcome: &Outcome) -> String {
        match outcome {
            Outcome::LoggedIn { identity, landed } => {
                format!("Logged in as {} ({}); at {}", identity.name, identity.role, landed.path())
            }
            Outcome::LoggedOut { previous, landed } => match previous {
                Some(identity) => format!("Logged out {}; at {}", identity.name, landed.path()),
                None => format!("Not logged in; at {}", landed.path()),
            },
            Outcome::Navigated { requested, landed } if requested == landed => {
                format!("At {}", landed.path())
            }
            Outcome::Navigated { requested, landed } => {
                format!("{} redirected to {}", requested.path(), landed.path())
            }
            Outcome::UserAdded { record } => format!("Added user {} ({})", record.id, record.email),
            Outcome::UsersRemoved { records } if records.is_empty() => {
                "No user with that id".to_string()
            }
            Outcome::UsersRemoved { records } => format!("Removed {} user(s)", records.len()),
            Outcome::RoleAdded { record } => format!("Added role {} ({})", record.id, record.name),
            Outcome::RolesRemoved { records } if records.is_empty() => {
                "No role with that id".to_string()
            }
            Outcome::RolesRemoved { records } => format!("Removed {} role(s)", records.len()),
        }
    }
}
