//! Constants used throughout the CLI.

/// Environment variable holding the master password for non-interactive use.
pub const PASSWORD_ENV: &str = "DISPASS_PASSWORD";

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "DISPASS_LOG";

/// Width of the label column in text output.
pub const LABEL_COLUMN_WIDTH: usize = 25;

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, and by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (config file).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// No password available, or confirmation did not match.
    pub const AUTH_FAILED: i32 = 5;
}
