//! Filesystem utilities for atomic writes.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Write `contents` to `destination` atomically.
///
/// The data is written to a sibling temp file, flushed, and then renamed
/// over the destination so readers never observe a half-written value.
///
/// # Errors
///
/// Returns an error if the temp file cannot be written or the rename fails
/// even after the fallback attempt.
pub fn write_atomic(destination: &Path, contents: &[u8]) -> io::Result<()> {
    let file_name = destination
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "destination has no file name"))?
        .to_string_lossy()
        .to_string();
    let temp_path = destination.with_file_name(format!(".{}.{}.tmp", file_name, std::process::id()));

    {
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(contents)?;
        file.sync_all()?;
    }

    rename_with_fallback(&temp_path, destination)
}

/// Rename a file, with fallback for platforms where rename fails if target exists.
///
/// If the rename ultimately fails, the temp file is cleaned up.
pub fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        // Windows refuses to rename over an existing file.
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}
