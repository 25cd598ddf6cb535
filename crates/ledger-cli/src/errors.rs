//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use ledger_state::LedgerError;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (selected ledger, API URL, etc.)
    NotFound { message: String, hint: String },

    /// Authentication failed (missing or rejected token)
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

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an AuthFailed error with message and hint.
    pub fn auth_failed_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::AuthFailed {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
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
}

/// Map library errors that have a dedicated exit code.
pub fn from_ledger_error(err: LedgerError) -> anyhow::Error {
    match err {
        LedgerError::Unauthorized(message) => CliError::auth_failed_with_hint(
            message,
            "Hint: Run `ledger auth login --token <TOKEN>`.",
        )
        .into(),
        LedgerError::InvalidInput(message) | LedgerError::Validation(message) => {
            CliError::invalid_input(message).into()
        }
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::exit_codes;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            CliError::not_found("x", "y").exit_code(),
            exit_codes::NOT_FOUND
        );
        assert_eq!(
            CliError::invalid_input("x").exit_code(),
            exit_codes::INVALID_INPUT
        );
        assert_eq!(
            CliError::auth_failed_with_hint("x", "y").exit_code(),
            exit_codes::AUTH_FAILED
        );
    }

    #[test]
    fn test_unauthorized_maps_to_auth_failed() {
        let err = from_ledger_error(LedgerError::Unauthorized("expired".to_string()));
        let cli = err.downcast_ref::<CliError>().unwrap();
        assert_eq!(cli.exit_code(), exit_codes::AUTH_FAILED);
        assert!(cli.to_string().contains("ledger auth login"));
    }

    #[test]
    fn test_other_errors_pass_through() {
        let err = from_ledger_error(LedgerError::Network("refused".to_string()));
        assert!(err.downcast_ref::<CliError>().is_none());
        assert!(err.downcast_ref::<LedgerError>().is_some());
    }
}
