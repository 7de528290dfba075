//! # AppCore
//!
//! Owns the session, the current route, both registries and the pending
//! notice. Intents are applied one at a time, each to completion.

use super::{Intent, IntentError, Outcome, StateSnapshot};
use crate::errors::Notice;
use crate::views::{
    build_menu, DashboardView, IdAssignment, MenuEntry, RoleDraft, RoleRecord, RolesRegistry,
    UserDraft, UserListing, UserRecord, UsersRegistry,
};
use rampart_authentication::{AuthenticationGate, IdentityResolver, Session};
use rampart_authorization::{
    authorize_route, require_capability, resolve_path, role_has_capability, Capability, Route,
};
use rampart_core::{Identity, RecordId};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Numbering policy for new registry records
    pub id_assignment: IdAssignment,
}

/// The headless console.
#[derive(Debug)]
pub struct AppCore {
    gate: AuthenticationGate,
    session: Session,
    route: Route,
    users: UsersRegistry,
    roles: RolesRegistry,
    notice: Option<Notice>,
}

impl Default for AppCore {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl AppCore {
    /// Core over the stock mock directory.
    pub fn new(config: AppConfig) -> Self {
        Self::with_gate(config, AuthenticationGate::with_mock_directory())
    }

    /// Core over a custom identity resolver.
    pub fn with_resolver(config: AppConfig, resolver: impl IdentityResolver + 'static) -> Self {
        Self::with_gate(config, AuthenticationGate::new(resolver))
    }

    fn with_gate(config: AppConfig, gate: AuthenticationGate) -> Self {
        let session = Session::new();
        let route = land(&session, resolve_path("/"));
        Self {
            users: UsersRegistry::seeded(config.id_assignment),
            roles: RolesRegistry::seeded(config.id_assignment),
            gate,
            session,
            route,
            notice: None,
        }
    }

    // ─── Dispatch ────────────────────────────────────────────

    /// Apply one intent.
    ///
    /// On failure the error is also recorded as the pending notice, and every
    /// later intent fails with [`IntentError::NoticePending`] until
    /// [`acknowledge`](Self::acknowledge) is called.
    pub fn dispatch(&mut self, intent: Intent) -> Result<Outcome, IntentError> {
        if self.notice.is_some() {
            warn!(intent = intent.name(), "refused: notice pending");
            return Err(IntentError::NoticePending);
        }
        debug!(intent = intent.name(), route = %self.route, "dispatch");
        let result = self.apply(intent);
        if let Err(err) = &result {
            warn!(error = %err, category = %err.category(), "intent failed");
            self.notice = Some(err.to_notice());
        }
        result
    }

    fn apply(&mut self, intent: Intent) -> Result<Outcome, IntentError> {
        match intent {
            Intent::Login { role } => self.login(&role),
            Intent::Logout => Ok(self.logout()),
            Intent::Navigate { path } => Ok(self.navigate(&path)),
            Intent::AddUser(draft) => self.add_user(draft).map(|record| Outcome::UserAdded { record }),
            Intent::RemoveUser { id } => self
                .remove_user(&id)
                .map(|records| Outcome::UsersRemoved { records }),
            Intent::AddRole(draft) => self.add_role(draft).map(|record| Outcome::RoleAdded { record }),
            Intent::RemoveRole { id } => self
                .remove_role(&id)
                .map(|records| Outcome::RolesRemoved { records }),
        }
    }

    fn login(&mut self, selection: &str) -> Result<Outcome, IntentError> {
        let identity = self.gate.login(&mut self.session, selection)?.clone();
        self.route = land(&self.session, Route::Dashboard);
        Ok(Outcome::LoggedIn {
            identity,
            landed: self.route,
        })
    }

    fn logout(&mut self) -> Outcome {
        let previous = self.gate.logout(&mut self.session);
        // the current screen is guarded again without an identity
        self.route = land(&self.session, self.route);
        Outcome::LoggedOut {
            previous,
            landed: self.route,
        }
    }

    fn navigate(&mut self, path: &str) -> Outcome {
        let requested = resolve_path(path);
        self.route = land(&self.session, requested);
        if requested != self.route || requested.path() != path {
            debug!(path, landed = %self.route, "redirected");
        }
        Outcome::Navigated {
            requested,
            landed: self.route,
        }
    }

    fn add_user(&mut self, draft: UserDraft) -> Result<UserRecord, IntentError> {
        require_capability(self.session.role(), Capability::ManageUsers, "Adding a user")?;
        let record = self.users.add(draft)?;
        debug!(id = %record.id, "user added");
        Ok(record)
    }

    fn remove_user(&mut self, id: &RecordId) -> Result<Vec<UserRecord>, IntentError> {
        require_capability(self.session.role(), Capability::ManageUsers, "Deleting a user")?;
        let removed = self.users.remove(id);
        debug!(%id, removed = removed.len(), "user removal");
        Ok(removed)
    }

    fn add_role(&mut self, draft: RoleDraft) -> Result<RoleRecord, IntentError> {
        require_capability(self.session.role(), Capability::ManageRoles, "Adding a role")?;
        let record = self.roles.add(draft)?;
        debug!(id = %record.id, "role added");
        Ok(record)
    }

    fn remove_role(&mut self, id: &RecordId) -> Result<Vec<RoleRecord>, IntentError> {
        require_capability(self.session.role(), Capability::ManageRoles, "Deleting a role")?;
        let removed = self.roles.remove(id);
        debug!(%id, removed = removed.len(), "role removal");
        Ok(removed)
    }

    // ─── Notices ─────────────────────────────────────────────

    /// The notice awaiting acknowledgment.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Dismiss the pending notice, returning it.
    pub fn acknowledge(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    // ─── Queries ─────────────────────────────────────────────

    /// Current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Logged-in identity, if any.
    pub fn identity(&self) -> Option<&Identity> {
        self.session.identity()
    }

    /// Route the console is on after the last guard check.
    pub fn current_route(&self) -> Route {
        self.route
    }

    /// Sidebar entries for the current role. Empty when logged out, since no
    /// sidebar is shown then.
    pub fn menu(&self) -> Vec<MenuEntry> {
        match self.session.role() {
            Some(role) => build_menu(Some(role)),
            None => Vec::new(),
        }
    }

    /// Users registry.
    pub fn users(&self) -> &UsersRegistry {
        &self.users
    }

    /// Roles registry.
    pub fn roles(&self) -> &RolesRegistry {
        &self.roles
    }

    /// Whether the current role may add or remove users.
    pub fn can_modify_users(&self) -> bool {
        role_has_capability(self.session.role(), Capability::ManageUsers)
    }

    /// Whether the current role may add or remove roles.
    pub fn can_modify_roles(&self) -> bool {
        role_has_capability(self.session.role(), Capability::ManageRoles)
    }

    /// Welcome card; `None` when logged out.
    pub fn dashboard(&self) -> Option<DashboardView> {
        self.session.identity().map(DashboardView::for_identity)
    }

    /// User rows as shown on `/users`.
    pub fn user_listing(&self) -> UserListing {
        self.users.listing(self.can_modify_users())
    }

    /// The `/team` screen: the user listing, read-only for managers.
    pub fn team_view(&self) -> UserListing {
        self.user_listing()
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            identity: self.session.identity().cloned(),
            route: self.route,
            menu: self.menu(),
            users: self.users.all().to_vec(),
            roles: self.roles.all().to_vec(),
            notice: self.notice.clone(),
        }
    }
}

/// Run the guard for `requested` and return where navigation ends up.
fn land(session: &Session, requested: Route) -> Route {
    authorize_route(session.identity(), requested).landing(requested)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::ValidationError;
    use rampart_core::Role;

    fn logged_in(role: Role) -> AppCore {
        let mut app = AppCore::default();
        app.dispatch(Intent::login(role.as_str())).unwrap();
        app
    }

    #[test]
    fn test_starts_logged_out_on_login() {
        let app = AppCore::default();
        assert_eq!(app.current_route(), Route::Login);
        assert!(app.identity().is_none());
        assert!(app.menu().is_empty());
        assert!(app.dashboard().is_none());
    }

    #[test]
    fn test_login_lands_on_dashboard() {
        let app = logged_in(Role::Admin);
        assert_eq!(app.current_route(), Route::Dashboard);
        let card = app.dashboard().unwrap();
        assert_eq!(card.greeting, "Welcome, Admin");
        assert_eq!(card.initial, Some('A'));
    }

    #[test]
    fn test_failed_login_sets_notice_and_blocks() {
        let mut app = AppCore::default();
        let err = app.dispatch(Intent::login("ROOT")).unwrap_err();
        assert_eq!(err.category(), crate::ErrorCategory::Input);
        assert_eq!(app.notice().map(|n| n.message.as_str()), Some("Login failed"));

        assert_eq!(
            app.dispatch(Intent::login("USER")),
            Err(IntentError::NoticePending)
        );
        assert!(app.identity().is_none());

        app.acknowledge();
        app.dispatch(Intent::login("USER")).unwrap();
        assert_eq!(app.session().role(), Some(Role::User));
    }

    #[test]
    fn test_logout_re_guards_current_route() {
        let mut app = logged_in(Role::SuperAdmin);
        app.dispatch(Intent::navigate("/roles")).unwrap();
        assert_eq!(app.current_route(), Route::Roles);

        let outcome = app.dispatch(Intent::Logout).unwrap();
        assert_matches::assert_matches!(outcome, Outcome::LoggedOut { landed: Route::Login, .. });
        assert_eq!(app.current_route(), Route::Login);
    }

    #[test]
    fn test_unknown_path_goes_to_login() {
        let mut app = logged_in(Role::User);
        let outcome = app.dispatch(Intent::navigate("/nowhere")).unwrap();
        assert_eq!(
            outcome,
            Outcome::Navigated {
                requested: Route::Login,
                landed: Route::Login
            }
        );
    }

    #[test]
    fn test_capability_denied_leaves_registry_unchanged() {
        let mut app = logged_in(Role::Admin);
        let err = app
            .dispatch(Intent::AddRole(
                RoleDraft::new("ops", "d").with_permission("TEAM_VIEW"),
            ))
            .unwrap_err();
        assert_matches::assert_matches!(err, IntentError::Denied(_));
        assert_eq!(err.category(), crate::ErrorCategory::Capability);
        assert_eq!(app.roles().count(), 4);
    }

    #[test]
    fn test_validation_error_becomes_notice() {
        let mut app = logged_in(Role::Admin);
        let err = app
            .dispatch(Intent::AddUser(UserDraft::new("", "x@example.com", Role::User)))
            .unwrap_err();
        assert_matches::assert_matches!(err, IntentError::Validation(ValidationError::MissingField(_)));
        assert_eq!(app.notice().unwrap().message, "Name is required");
        assert_eq!(app.users().count(), 4);
    }

    #[test]
    fn test_config_selects_id_assignment() {
        let config = AppConfig {
            id_assignment: IdAssignment::RegistrySize,
        };
        let mut app = AppCore::new(config);
        app.dispatch(Intent::login("SUPERADMIN")).unwrap();
        app.dispatch(Intent::RemoveUser { id: "1".into() }).unwrap();
        let outcome = app
            .dispatch(Intent::AddUser(UserDraft::new("Eve", "eve@example.com", Role::User)))
            .unwrap();
        assert_matches::assert_matches!(outcome, Outcome::UserAdded { record } if record.id.as_str() == "4");
    }
}
