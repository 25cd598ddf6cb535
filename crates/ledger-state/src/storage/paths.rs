//! Default locations for the storage scopes.
//!
//! Session-scoped data lives under `$XDG_RUNTIME_DIR`, which the OS wipes
//! when the login session ends. Durable data lives under `$XDG_DATA_HOME`.

use std::path::PathBuf;

use super::file::validate_key;
use crate::error::{LedgerError, Result};

/// Directory holding the files of one session.
pub fn session_dir(session_id: &str) -> Result<PathBuf> {
    validate_key(session_id)?;
    Ok(runtime_dir().join("sessions").join(session_id))
}

/// Directory holding durable (local-storage scoped) values.
pub fn local_dir() -> Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("ledger"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("ledger"))
}

fn runtime_dir() -> PathBuf {
    if let Ok(value) = std::env::var("XDG_RUNTIME_DIR") {
        if !value.trim().is_empty() {
            return PathBuf::from(value).join("ledger");
        }
    }
    std::env::temp_dir().join("ledger-runtime")
}

fn home_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").map_err(|_| {
        LedgerError::Storage("HOME is not set; cannot resolve default paths".to_string())
    })?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_dir_rejects_path_traversal() {
        assert!(session_dir("../etc").is_err());
        assert!(session_dir("").is_err());
    }

    #[test]
    fn test_session_dir_is_scoped_by_id() {
        let a = session_dir("tab-a").unwrap();
        let b = session_dir("tab-b").unwrap();
        assert_ne!(a, b);
        assert!(a.ends_with("sessions/tab-a"));
    }
}
