//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (no ledger selected, no API configured).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Authentication failed (missing or rejected token).
    pub const AUTH_FAILED: i32 = 5;
}

/// Session used when neither `--session` nor the config names one.
pub const DEFAULT_SESSION_ID: &str = "default";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "LEDGER_LOG";
