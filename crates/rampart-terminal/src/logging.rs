//! Subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

/// Filter precedence: `--verbose`, then `RUST_LOG`, then the config level.
pub fn filter(verbose: bool, configured: &str) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured))
}

/// Install the global fmt subscriber on stderr. A second call is a no-op.
pub fn init(verbose: bool, configured: &str, ansi: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose, configured))
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .try_init();
}
