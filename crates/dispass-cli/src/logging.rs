//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never mix with passphrases on stdout. The filter
//! comes from `DISPASS_LOG` when set; otherwise `-v` flags pick the level.

use tracing_subscriber::filter::EnvFilter;

use crate::constants::LOG_ENV;

/// Install the global `tracing` subscriber.
pub fn init(verbose: u8, quiet: bool) {
    let env_filter = match std::env::var(LOG_ENV) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::new(directives),
        _ => EnvFilter::new(default_directive(verbose, quiet)),
    };

    // Fails only if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    match (quiet, verbose) {
        (true, 0) => "error",
        (_, 0) => "warn",
        (_, 1) => "debug",
        _ => "trace",
    }
}
