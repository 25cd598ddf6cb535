//! File-backed key-value store.
//!
//! One file per key inside a directory. Writes go through
//! [`crate::fs::write_atomic`] so a crash mid-write leaves the previous
//! value intact.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::paths;
use super::traits::KeyValueStore;
use crate::error::{LedgerError, Result};
use crate::fs::write_atomic;

/// A `KeyValueStore` persisted as files in a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`. The directory is created lazily on
    /// first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Session-scoped store for `session_id`.
    pub fn session(session_id: &str) -> Result<Self> {
        Ok(Self::new(paths::session_dir(session_id)?))
    }

    /// Durable store shared by all sessions.
    pub fn local() -> Result<Self> {
        Ok(Self::new(paths::local_dir()?))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Drop every value in this store by removing its directory.
    ///
    /// Used when a session ends; a missing directory is not an error.
    pub fn end_session(&self) -> Result<()> {
        match fs::remove_dir_all(&self.dir) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(LedgerError::Storage(format!(
                "Failed to remove session directory {}: {}",
                self.dir.display(),
                err
            ))),
        }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(LedgerError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                err
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to create storage directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;
        write_atomic(&path, value.as_bytes()).map_err(|e| {
            LedgerError::Storage(format!("Failed to write {}: {}", path.display(), e))
        })?;
        tracing::trace!(key, path = %path.display(), "stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(LedgerError::Storage(format!(
                "Failed to remove {}: {}",
                path.display(),
                err
            ))),
        }
    }
}

/// Keys double as file names, so only a conservative character set is allowed.
pub(crate) fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if valid {
        Ok(())
    } else {
        Err(LedgerError::InvalidInput(format!(
            "Invalid storage key \"{}\" (use letters, digits, '.', '_' or '-')",
            key
        )))
    }
}
