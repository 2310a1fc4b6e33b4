//! Obtaining the master password.

use std::io::{BufRead, IsTerminal};

use dialoguer::Password;
use secrecy::SecretString;
use zeroize::Zeroize;

use crate::constants::PASSWORD_ENV;
use crate::errors::CliError;

/// Where to look for the master password.
#[derive(Debug, Clone, Copy)]
pub struct SecretSource {
    /// Read the first line of stdin
    pub stdin: bool,
    /// Prompt twice and compare
    pub confirm: bool,
}

/// Read the master password from stdin, `DISPASS_PASSWORD`, or a prompt.
pub fn read_secret(source: SecretSource) -> anyhow::Result<SecretString> {
    if source.stdin {
        return read_secret_line(std::io::stdin().lock());
    }

    if let Ok(value) = std::env::var(PASSWORD_ENV) {
        if !value.is_empty() {
            tracing::debug!("using password from {}", PASSWORD_ENV);
            return Ok(SecretString::from(value));
        }
    }

    if !std::io::stdin().is_terminal() {
        return Err(CliError::auth_failed_with_hint(
            "No password provided and no TTY available.",
            format!("Hint: Set {} or pass --password-stdin.", PASSWORD_ENV),
        )
        .into());
    }

    let prompt = Password::new().with_prompt("Password");
    let prompt = if source.confirm {
        prompt.with_confirmation("Again", "Passwords do not match. Please try again.")
    } else {
        prompt
    };
    let password = prompt
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))?;
    Ok(SecretString::from(password))
}

/// Read one line as the password, without its line terminator.
fn read_secret_line(mut reader: impl BufRead) -> anyhow::Result<SecretString> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(|e| anyhow::anyhow!("Failed to read password from stdin: {}", e))?;

    let trimmed_len = line.trim_end_matches(&['\n', '\r'][..]).len();
    if trimmed_len == 0 {
        line.zeroize();
        return Err(CliError::auth_failed("Empty password on stdin.").into());
    }
    line.truncate(trimmed_len);
    Ok(SecretString::from(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    use secrecy::ExposeSecret;

    #[test]
    fn test_read_secret_line_strips_newline() {
        let secret = read_secret_line("qqqqqqqq\r\nignored\n".as_bytes()).expect("read");
        assert_eq!(secret.expose_secret(), "qqqqqqqq");
    }

    #[test]
    fn test_read_secret_line_keeps_spaces() {
        let secret = read_secret_line(" two words \n".as_bytes()).expect("read");
        assert_eq!(secret.expose_secret(), " two words ");
    }

    #[test]
    fn test_read_secret_line_rejects_empty() {
        assert!(read_secret_line("\n".as_bytes()).is_err());
        assert!(read_secret_line("".as_bytes()).is_err());
    }
}
