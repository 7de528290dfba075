//! Scripted shell sessions.

use rampart_app::{AppConfig, AppCore, Role, Route};
use rampart_terminal::{Renderer, Shell};

fn shell() -> Shell {
    Shell::new(AppCore::new(AppConfig::default()), Renderer::new(false), true)
}

fn run_script(shell: &mut Shell, script: &str) -> String {
    let mut out = Vec::new();
    shell.run(script.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_superadmin_session() {
    let mut shell = shell();
    let output = run_script(
        &mut shell,
        "login SUPERADMIN\n\
         roles\n\
         add-role ops TEAM_VIEW Operations staff\n\
         add-user eve@example.com USER Eve Adams\n\
         rm-user 1\n\
         quit\n\
         whoami\n",
    );

    assert!(output.contains("Sign in"));
    assert!(output.contains("Welcome, Super Admin"));
    assert!(output.contains("Role Management"));
    assert!(output.contains("Added role 5 (ops)"));
    assert!(output.contains("Added user 5 (eve@example.com)"));
    assert!(output.contains("Removed 1 user(s)"));
    // nothing after quit runs
    assert!(!output.contains("as SUPERADMIN (id"));

    let app = shell.app();
    assert_eq!(app.session().role(), Some(Role::SuperAdmin));
    assert_eq!(app.roles().count(), 5);
    assert_eq!(app.users().count(), 4);
}

#[test]
fn test_notice_blocks_until_ok() {
    let mut shell = shell();
    let output = run_script(
        &mut shell,
        "login OWNER\n\
         login ADMIN\n\
         ok\n\
         login ADMIN\n",
    );

    assert!(output.contains("! [Input] Login failed"));
    assert!(output.contains("Dismissed: Login failed"));
    assert_eq!(shell.app().session().role(), Some(Role::Admin));
    assert!(shell.app().notice().is_none());
}

#[test]
fn test_manager_cannot_modify_users() {
    let mut shell = shell();
    let output = run_script(
        &mut shell,
        "login MANAGER\n\
         team\n\
         add-user x@example.com USER X\n",
    );

    assert!(output.contains("Team View"));
    assert!(output.contains("(read-only)"));
    assert!(output.contains("[Permission]"));
    assert_eq!(shell.app().users().count(), 4);
    assert_eq!(shell.app().current_route(), Route::Team);
}

#[test]
fn test_validation_notice() {
    let mut shell = shell();
    let output = run_script(
        &mut shell,
        "login ADMIN\n\
         add-user not-an-email USER Someone\n",
    );
    assert!(output.contains("Please enter a valid email address"));
    assert!(shell.app().notice().is_some());
}

#[test]
fn test_parse_errors_do_not_stop_the_loop() {
    let mut shell = shell();
    let output = run_script(&mut shell, "frobnicate\nlogin USER\nstate\n");
    assert!(output.contains("Unknown command \"frobnicate\""));
    assert!(output.contains("\"role\": \"USER\""));
    assert_eq!(shell.app().current_route(), Route::Dashboard);
}

#[test]
fn test_logout_returns_to_sign_in() {
    let mut shell = shell();
    run_script(&mut shell, "login ADMIN\ngo /users\nlogout\n");
    assert_eq!(shell.app().current_route(), Route::Login);
    assert!(shell.app().identity().is_none());
}

#[test]
fn test_repeated_permission_still_creates_role() {
    let mut shell = shell();
    let output = run_script(
        &mut shell,
        "login SUPERADMIN\nadd-role qa TEAM_VIEW,TEAM_VIEW testers\n",
    );
    assert!(output.contains("Added role 5 (qa)"));
    assert!(shell.app().notice().is_none());
    let added = shell.app().roles().all().last().unwrap();
    assert_eq!(added.permissions.len(), 1);
}
