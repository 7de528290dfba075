//! `rampart` command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use rampart_app::{authorize_route, build_menu, resolve_path, AppCore, Intent, Role, Route};
use rampart_terminal::cli::{Cli, Commands};
use rampart_terminal::{logging, Renderer, Shell, TerminalConfig};
use serde_json::json;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(TerminalConfig::default_path);
    let config = TerminalConfig::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    logging::init(cli.verbose, &config.logging.level, config.ui.color);
    tracing::debug!(path = %config_path.display(), "configuration loaded");

    let renderer = Renderer::new(config.ui.color && !cli.json);

    match cli.command {
        Commands::Shell => {
            let app = AppCore::new(config.app.clone());
            let mut shell = Shell::new(app, renderer, config.ui.show_menu);
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            shell
                .run(stdin.lock(), &mut stdout)
                .context("shell terminated")?;
        }

        Commands::Routes => {
            if cli.json {
                let rows: Vec<_> = Route::ALL
                    .iter()
                    .map(|route| {
                        json!({
                            "path": route.path(),
                            "title": route.title(),
                            "constraint": route.constraint(),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                print_lines(&renderer.routes());
            }
        }

        Commands::Menu { role } => {
            let role: Role = role.parse()?;
            let menu = build_menu(Some(role));
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&menu)?);
            } else {
                print_lines(&renderer.menu(&menu));
            }
        }

        Commands::Check { role, path } => {
            let mut app = AppCore::new(config.app.clone());
            if let Some(role) = role {
                app.dispatch(Intent::login(role.as_str()))
                    .with_context(|| format!("logging in as {role}"))?;
            }
            let requested = resolve_path(&path);
            let decision = authorize_route(app.identity(), requested);
            let landed = decision.landing(requested);
            if cli.json {
                let body = json!({
                    "path": path,
                    "route": requested,
                    "decision": decision,
                    "landed": landed,
                });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                println!("{}", renderer.decision(&path, &decision, landed));
            }
        }
    }

    Ok(())
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
