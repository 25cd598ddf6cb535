//! Error types for ledger client state.
//!
//! Errors are descriptive at the library level; the CLI layer maps them
//! to user-friendly messages and exit codes.

use thiserror::Error;

/// Result type alias for ledger state operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Core error type for ledger state operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Transport failure talking to the backend
    #[error("Network error: {0}")]
    Network(String),

    /// The backend rejected the bearer token
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Non-success response from the backend
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Generic error (fallback)
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Validation(err.to_string())
    }
}

impl From<reqwest::Error> for LedgerError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LedgerError::Validation(format!("Malformed response body: {}", err))
        } else {
            LedgerError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_maps_to_storage() {
        let err: LedgerError = std::io::Error::other("disk full").into();
        assert!(matches!(err, LedgerError::Storage(ref msg) if msg.contains("disk full")));
    }

    #[test]
    fn test_json_error_maps_to_validation() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: LedgerError = parse.into();
        assert!(matches!(err, LedgerError::Validation(_)));
    }

    #[test]
    fn test_api_error_display() {
        let err = LedgerError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "API error (500): boom");
    }
}
