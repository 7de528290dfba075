//! # Interactive Shell
//!
//! One command per line. Intent commands go through
//! [`AppCore::dispatch`]; a failed intent prints its notice and blocks
//! further intents until `ok` is entered. Screen commands (`users`,
//! `roles`, `team`, `dashboard`) navigate, so the route guard applies.

use crate::render::Renderer;
use rampart_app::{AppCore, Intent, Role, RoleDraft, Route, UserDraft, PERMISSION_OPTIONS};
use std::io::{self, BufRead, Write};
use thiserror::Error;

const HELP: &[&str] = &[
    "login ROLE                              log in as SUPERADMIN, ADMIN, MANAGER or USER",
    "logout                                  end the session",
    "go PATH                                 navigate, e.g. go /users",
    "dashboard | users | roles | team        open a screen",
    "whoami                                  current identity",
    "menu                                    sidebar for the current role",
    "add-user EMAIL ROLE NAME...             create a user",
    "rm-user ID                              delete a user",
    "add-role NAME PERM[,PERM...] DESC...    create a role",
    "rm-role ID                              delete a role",
    "ok                                      acknowledge the pending notice",
    "state                                   JSON snapshot",
    "help | quit",
];

/// A line that could not be turned into a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    /// First word is not a command
    #[error("Unknown command {0:?}; try `help`")]
    UnknownCommand(String),

    /// Wrong arguments; carries the usage line
    #[error("Usage: {0}")]
    Usage(&'static str),

    /// Snapshot could not be serialized
    #[error("Failed to render state: {0}")]
    Render(String),
}

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// `login ROLE`
    Login(String),
    /// `logout`
    Logout,
    /// Raw path, resolved by the core
    Go(String),
    /// Screen shortcut; same as `Go` with the route's path
    Open(Route),
    /// `whoami`
    WhoAmI,
    /// `menu`
    Menu,
    /// `add-user EMAIL ROLE NAME...`
    AddUser(UserDraft),
    /// `rm-user ID`
    RemoveUser(String),
    /// `add-role NAME PERMS DESCRIPTION...`
    AddRole(RoleDraft),
    /// `rm-role ID`
    RemoveRole(String),
    /// `ok`
    Acknowledge,
    /// `state`
    State,
    /// `help`
    Help,
    /// `quit` or `exit`
    Quit,
}

impl ShellCommand {
    /// Parse one line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, ShellError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        if verb.starts_with('#') {
            return Ok(None);
        }
        let rest: Vec<&str> = words.collect();

        let command = match (verb, rest.as_slice()) {
            ("login", [role]) => Self::Login((*role).to_string()),
            ("login", _) => return Err(ShellError::Usage("login ROLE")),
            ("logout", []) => Self::Logout,
            ("go", [path]) => Self::Go((*path).to_string()),
            ("go", _) => return Err(ShellError::Usage("go PATH")),
            ("dashboard", []) => Self::Open(Route::Dashboard),
            ("users", []) => Self::Open(Route::Users),
            ("roles", []) => Self::Open(Route::Roles),
            ("team", []) => Self::Open(Route::Team),
            ("whoami", []) => Self::WhoAmI,
            ("menu", []) => Self::Menu,
            ("add-user", [email, role, name @ ..]) if !name.is_empty() => {
                let role: Role = role
                    .parse()
                    .map_err(|_| ShellError::Usage("add-user EMAIL ROLE NAME..."))?;
                Self::AddUser(UserDraft::new(name.join(" "), *email, role))
            }
            ("add-user", _) => return Err(ShellError::Usage("add-user EMAIL ROLE NAME...")),
            ("rm-user", [id]) => Self::RemoveUser((*id).to_string()),
            ("rm-user", _) => return Err(ShellError::Usage("rm-user ID")),
            ("add-role", [name, permissions, description @ ..]) if !description.is_empty() => {
                let mut draft = RoleDraft::new(*name, description.join(" "));
                for permission in permissions.split(',').filter(|p| !p.is_empty()) {
                    draft.permissions.insert(permission.to_string());
                }
                Self::AddRole(draft)
            }
            ("add-role", _) => {
                return Err(ShellError::Usage("add-role NAME PERM[,PERM...] DESCRIPTION..."))
            }
            ("rm-role", [id]) => Self::RemoveRole((*id).to_string()),
            ("rm-role", _) => return Err(ShellError::Usage("rm-role ID")),
            ("ok", []) => Self::Acknowledge,
            ("state", []) => Self::State,
            ("help", _) => Self::Help,
            ("quit" | "exit", _) => Self::Quit,
            (other, _) => return Err(ShellError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

/// Output of one shell line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellResponse {
    /// Lines to print
    pub lines: Vec<String>,
    /// Stop reading input
    pub quit: bool,
}

impl ShellResponse {
    fn lines(lines: Vec<String>) -> Self {
        Self { lines, quit: false }
    }

    fn line(line: impl Into<String>) -> Self {
        Self::lines(vec![line.into()])
    }
}

/// Line shell over an [`AppCore`].
#[derive(Debug)]
pub struct Shell {
    app: AppCore,
    renderer: Renderer,
    show_menu: bool,
}

impl Shell {
    /// Shell over `app`.
    pub fn new(app: AppCore, renderer: Renderer, show_menu: bool) -> Self {
        Self {
            app,
            renderer,
            show_menu,
        }
    }

    /// The driven core.
    pub fn app(&self) -> &AppCore {
        &self.app
    }

    /// Parse and run one line.
    pub fn execute(&mut self, line: &str) -> Result<ShellResponse, ShellError> {
        match ShellCommand::parse(line)? {
            Some(command) => self.run_command(command),
            None => Ok(ShellResponse::default()),
        }
    }

    /// Run an already parsed command.
    pub fn run_command(&mut self, command: ShellCommand) -> Result<ShellResponse, ShellError> {
        let response = match command {
            ShellCommand::Login(role) => self.dispatch(Intent::Login { role }, true),
            ShellCommand::Logout => self.dispatch(Intent::Logout, true),
            ShellCommand::Go(path) => self.dispatch(Intent::navigate(path), true),
            ShellCommand::Open(route) => self.dispatch(Intent::navigate(route.path()), true),
            ShellCommand::WhoAmI => ShellResponse::line(self.renderer.identity(self.app.identity())),
            ShellCommand::Menu => ShellResponse::lines(self.renderer.menu(&self.app.menu())),
            ShellCommand::AddUser(draft) => self.dispatch(Intent::AddUser(draft), false),
            ShellCommand::RemoveUser(id) => {
                self.dispatch(Intent::RemoveUser { id: id.into() }, false)
            }
            ShellCommand::AddRole(draft) => self.dispatch(Intent::AddRole(draft), false),
            ShellCommand::RemoveRole(id) => {
                self.dispatch(Intent::RemoveRole { id: id.into() }, false)
            }
            ShellCommand::Acknowledge => match self.app.acknowledge() {
                Some(notice) => ShellResponse::line(format!("Dismissed: {}", notice.message)),
                None => ShellResponse::line("Nothing to acknowledge"),
            },
            ShellCommand::State => {
                let json = self
                    .app
                    .snapshot()
                    .to_json()
                    .map_err(|e| ShellError::Render(e.to_string()))?;
                ShellResponse::lines(json.lines().map(str::to_string).collect())
            }
            ShellCommand::Help => ShellResponse::lines(HELP.iter().map(|l| l.to_string()).collect()),
            ShellCommand::Quit => ShellResponse {
                lines: Vec::new(),
                quit: true,
            },
        };
        Ok(response)
    }

    fn dispatch(&mut self, intent: Intent, show_screen: bool) -> ShellResponse {
        match self.app.dispatch(intent) {
            Ok(outcome) => {
                let mut lines = vec![self.renderer.outcome(&outcome)];
                if show_screen {
                    lines.extend(self.screen());
                }
                ShellResponse::lines(lines)
            }
            // the refused intent's notice, or the one still pending
            Err(_) => ShellResponse::lines(
                self.app
                    .notice()
                    .map(|notice| self.renderer.notice(notice))
                    .unwrap_or_default(),
            ),
        }
    }

    /// The current route's screen, with the sidebar when enabled.
    pub fn screen(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.show_menu && self.app.identity().is_some() {
            lines.push(self.renderer.heading("Menu"));
            lines.extend(self.renderer.menu(&self.app.menu()));
        }
        match self.app.current_route() {
            Route::Login => {
                lines.push(self.renderer.heading(Route::Login.title()));
                let roles: Vec<&str> = Role::all().map(|r| r.as_str()).collect();
                lines.push(format!("  login {}", roles.join("|")));
            }
            Route::Dashboard => {
                if let Some(view) = self.app.dashboard() {
                    lines.extend(self.renderer.dashboard(&view));
                }
            }
            Route::Users => lines.extend(
                self.renderer
                    .users(Route::Users.title(), &self.app.user_listing()),
            ),
            Route::Roles => lines.extend(
                self.renderer
                    .roles(self.app.roles().all(), self.app.can_modify_roles()),
            ),
            Route::Team => lines.extend(
                self.renderer
                    .users(Route::Team.title(), &self.app.team_view()),
            ),
        }
        if self.app.can_modify_roles() && self.app.current_route() == Route::Roles {
            lines.push(format!("  permissions: {}", PERMISSION_OPTIONS.join(", ")));
        }
        lines
    }

    /// Read lines until EOF or `quit`. Parse errors are reported and the
    /// loop continues.
    pub fn run(&mut self, input: impl BufRead, output: &mut impl Write) -> io::Result<()> {
        for line in self.screen() {
            writeln!(output, "{line}")?;
        }
        for line in input.lines() {
            let line = line?;
            let response = match self.execute(&line) {
                Ok(response) => response,
                Err(err) => ShellResponse::line(err.to_string()),
            };
            for out in &response.lines {
                writeln!(output, "{out}")?;
            }
            output.flush()?;
            if response.quit {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_parse_add_user_joins_name() {
        let command = ShellCommand::parse("add-user eve@example.com MANAGER Eve  Adams")
            .unwrap()
            .unwrap();
        assert_matches!(command, ShellCommand::AddUser(draft) => {
            assert_eq!(draft.name, "Eve Adams");
            assert_eq!(draft.email, "eve@example.com");
            assert_eq!(draft.role, Role::Manager);
        });
    }

    #[test]
    fn test_parse_add_role_splits_permissions() {
        let command = ShellCommand::parse("add-role ops TEAM_VIEW,REPORTS Operations staff")
            .unwrap()
            .unwrap();
        assert_matches!(command, ShellCommand::AddRole(draft) => {
            let permissions: Vec<&str> = draft.permissions.iter().map(String::as_str).collect();
            assert_eq!(permissions, ["TEAM_VIEW", "REPORTS"]);
            assert_eq!(draft.description, "Operations staff");
        });
    }

    #[test]
    fn test_parse_add_role_keeps_repeated_permission_once() {
        let command = ShellCommand::parse("add-role qa TEAM_VIEW,TEAM_VIEW testers")
            .unwrap()
            .unwrap();
        assert_matches!(command, ShellCommand::AddRole(draft) => {
            let permissions: Vec<&str> = draft.permissions.iter().map(String::as_str).collect();
            assert_eq!(permissions, ["TEAM_VIEW"]);
        });
    }

    #[test]
    fn test_parse_rejects_bad_lines() {
        assert_eq!(ShellCommand::parse("   ").unwrap(), None);
        assert_eq!(ShellCommand::parse("# note").unwrap(), None);
        assert_matches!(ShellCommand::parse("login"), Err(ShellError::Usage(_)));
        assert_matches!(
            ShellCommand::parse("add-user a@b.co OWNER Al"),
            Err(ShellError::Usage(_))
        );
        assert_matches!(ShellCommand::parse("sudo"), Err(ShellError::UnknownCommand(_)));
    }

    #[test]
    fn test_screen_commands_are_guarded() {
        let mut shell = Shell::new(AppCore::default(), Renderer::new(false), false);
        shell.execute("login USER").unwrap();
        let response = shell.execute("users").unwrap();
        assert_eq!(shell.app().current_route(), Route::Dashboard);
        assert_eq!(response.lines[0], "/users redirected to /dashboard");
    }
}
