//! Command-line argument definitions. No behavior lives here.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level arguments.
#[derive(Debug, Parser)]
#[command(name = "rampart")]
#[command(about = "Rampart - role-based admin console", long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (defaults to ~/.rampart/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit JSON from one-shot commands
    #[arg(long, global = true)]
    pub json: bool,
}

/// `rampart` subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Interactive console reading commands from stdin
    Shell,

    /// List every route and who may open it
    Routes,

    /// Show the sidebar for a role
    Menu {
        /// SUPERADMIN, ADMIN, MANAGER or USER
        role: String,
    },

    /// Run the route guard for a path
    Check {
        /// Log in as this role first; omitted means logged out
        #[arg(short, long)]
        role: Option<String>,

        /// Requested path, e.g. /users
        path: String,
    },
}
