//! # Rampart Terminal
//!
//! Line-oriented frontend over [`rampart_app::AppCore`]: an interactive
//! shell plus one-shot inspection commands.
//!
//! - `cli` holds the clap argument definitions only
//! - `config` loads the TOML config file
//! - `shell` parses shell lines and drives the core
//! - `render` turns views into text

pub mod cli;
pub mod config;
pub mod logging;
pub mod render;
pub mod shell;

pub use config::{ConfigError, LoggingConfig, TerminalConfig, UiConfig};
pub use render::Renderer;
pub use shell::{Shell, ShellCommand, ShellError, ShellResponse};
