//! CLI error types for structured error handling.
//!
//! Typed errors map to specific exit codes; everything else goes through
//! `anyhow` and exits with 1.

use std::fmt;

use dispass_core::DispassError;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (config file)
    NotFound { message: String, hint: String },

    /// No usable password
    AuthFailed {
        message: String,
        hint: Option<String>,
    },

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::AuthFailed { message, hint } => {
                if let Some(h) = hint {
                    write!(f, "{}\n{}", message, h)
                } else {
                    write!(f, "{}", message)
                }
            }
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl From<DispassError> for CliError {
    fn from(err: DispassError) -> Self {
        CliError::InvalidInput(err.to_string())
    }
}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an AuthFailed error with message.
    pub fn auth_failed(message: impl Into<String>) -> Self {
        CliError::AuthFailed {
            message: message.into(),
            hint: None,
        }
    }

    /// Create an AuthFailed error with message and hint.
    pub fn auth_failed_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::AuthFailed {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use super::constants::exit_codes;
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::AuthFailed { .. } => exit_codes::AUTH_FAILED,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }

    /// Print error message to stderr and exit with appropriate code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        std::process::exit(self.exit_code())
    }
}
