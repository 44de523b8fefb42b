//! tracing subscriber setup for the binary

use crate::output::Verbosity;
use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Environment variable overriding the log filter (e.g. `release_lines=trace`)
pub const LOG_ENV: &str = "RELEASE_LINES_LOG";

/// Default filter directive for a verbosity level
pub fn default_directive(verbosity: Verbosity) -> &'static str {
    match verbosity {
        Verbosity::Quiet => "off",
        Verbosity::Normal => "error",
        Verbosity::Verbose => "release_lines=debug,warn",
    }
}

/// Install a stderr subscriber. `RELEASE_LINES_LOG` takes precedence over
/// the verbosity default.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let subscriber = FmtSubscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .finish();

    // Ignored when a subscriber is already installed (tests)
    let _ = tracing::subscriber::set_global_default(subscriber);
}
