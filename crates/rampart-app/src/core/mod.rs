//! # Core Application Module
//!
//! - [`AppCore`]: the main application entry point
//! - [`Intent`]: user actions
//! - [`Outcome`]: what a successful intent did
//! - [`StateSnapshot`]: serializable state snapshot
//! - [`AppConfig`]: application configuration
//! - [`IntentError`]: error types for intent dispatch

mod app;
mod error;
mod intent;
mod snapshot;

pub use app::{AppConfig, AppCore};
pub use error::IntentError;
pub use intent::{Intent, Outcome};
pub use snapshot::StateSnapshot;
