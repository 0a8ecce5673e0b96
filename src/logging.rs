//! Tracing subscriber setup.
//!
//! Logs always go to stderr: stdout carries command reports and, for
//! `serve`, the MCP stdio transport.

use std::io;

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV_VAR: &str = "TRCACHE_LOG";

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let default_directive = if verbose { "trcache=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
