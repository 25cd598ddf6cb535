//! Key-value storage trait definition.
//!
//! The `KeyValueStore` trait is the seam between the state containers and
//! wherever their snapshots live. A session-scoped store plays the role of
//! browser session storage (survives reloads, not the end of the session);
//! a durable store plays the role of local storage.

use crate::error::Result;

/// String key-value storage.
///
/// All implementations must ensure:
/// - `get` after a successful `set` on the same key observes the new value
/// - `set` replaces the whole value (no partial writes are visible)
/// - `remove` on a missing key is not an error
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidInput` for keys the backend cannot hold
    /// and `LedgerError::Storage` if the write fails.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the value stored under `key`, if any.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_is_object_safe() {
        fn _accepts_dyn_store(_store: &dyn KeyValueStore) {}
    }
}
