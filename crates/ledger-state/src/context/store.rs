//! Ledger context store.
//!
//! Holds the ledger the user is currently viewing. The store is an explicit
//! handle: construct it once with [`LedgerContextStore::restore`] and clone
//! it into every view that needs the ledger identity.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::types::{PersistedContext, PersistedEnvelope, SelectedLedger};
use crate::error::{LedgerError, Result};
use crate::storage::KeyValueStore;

/// Session storage key the snapshot is written under.
pub const LEDGER_STORE_KEY: &str = "ledger-store";

/// Version of the persisted envelope.
pub const LEDGER_STORE_VERSION: u32 = 0;

#[derive(Debug, Default)]
struct ContextState {
    ledger: Option<SelectedLedger>,
    /// Whether `ledger` was loaded from storage at start. Never persisted.
    restored: bool,
}

struct Inner {
    storage: Arc<dyn KeyValueStore>,
    state: RwLock<ContextState>,
}

/// Shared handle to the selected-ledger state.
#[derive(Clone)]
pub struct LedgerContextStore {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for LedgerContextStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerContextStore")
            .field("state", &*self.read())
            .finish_non_exhaustive()
    }
}

impl LedgerContextStore {
    /// Create the store, loading any snapshot left in `storage`.
    ///
    /// Missing, unreadable, malformed or partially-set snapshots all yield
    /// the unselected state; they are logged, never returned as errors.
    pub fn restore(storage: Arc<dyn KeyValueStore>) -> Self {
        let ledger = load_snapshot(storage.as_ref());
        let restored = ledger.is_some();
        if let Some(ref ledger) = ledger {
            tracing::debug!(ledger_id = %ledger.ledger_id, "restored ledger context");
        }
        Self {
            inner: Arc::new(Inner {
                storage,
                state: RwLock::new(ContextState { ledger, restored }),
            }),
        }
    }

    /// Replace the whole context with `ledger` and persist it.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Validation` if a required field is blank, or the
    /// storage error if the snapshot could not be written. In both cases the
    /// current context is left unchanged.
    pub fn set_ledger(&self, ledger: SelectedLedger) -> Result<()> {
        ledger.validate()?;
        let mut state = self.write();
        self.persist(Some(&ledger))?;
        tracing::debug!(ledger_id = %ledger.ledger_id, "selected ledger");
        state.ledger = Some(ledger);
        state.restored = false;
        Ok(())
    }

    /// Reset to "no ledger selected" and persist the cleared state.
    pub fn clear_ledger(&self) -> Result<()> {
        let mut state = self.write();
        self.persist(None)?;
        tracing::debug!("cleared ledger context");
        state.ledger = None;
        state.restored = false;
        Ok(())
    }

    /// Snapshot of the selected ledger, if any.
    pub fn ledger(&self) -> Option<SelectedLedger> {
        self.read().ledger.clone()
    }

    /// The selected ledger, or `LedgerError::NotFound` when none is selected.
    pub fn require_ledger(&self) -> Result<SelectedLedger> {
        self.ledger()
            .ok_or_else(|| LedgerError::NotFound("no ledger selected".to_string()))
    }

    pub fn is_selected(&self) -> bool {
        self.read().ledger.is_some()
    }

    /// Whether the current snapshot came from storage rather than a
    /// selection made during this run.
    pub fn was_restored(&self) -> bool {
        self.read().restored
    }

    fn persist(&self, ledger: Option<&SelectedLedger>) -> Result<()> {
        let envelope = PersistedEnvelope {
            state: PersistedContext::from(ledger),
            version: LEDGER_STORE_VERSION,
        };
        let json = serde_json::to_string(&envelope)?;
        self.inner.storage.set(LEDGER_STORE_KEY, &json)
    }

    fn read(&self) -> RwLockReadGuard<'_, ContextState> {
        self.inner
            .state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, ContextState> {
        self.inner
            .state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn load_snapshot(storage: &dyn KeyValueStore) -> Option<SelectedLedger> {
    let raw = match storage.get(LEDGER_STORE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            tracing::warn!(error = %err, "could not read ledger context; starting unselected");
            return None;
        }
    };

    let envelope: PersistedEnvelope = match serde_json::from_str(&raw) {
        Ok(envelope) => envelope,
        Err(err) => {
            tracing::warn!(error = %err, "discarding malformed ledger context");
            return None;
        }
    };
    if envelope.version != LEDGER_STORE_VERSION {
        tracing::warn!(
            version = envelope.version,
            "discarding ledger context with unknown version"
        );
        return None;
    }

    match envelope.state.into_selected() {
        Ok(ledger) => ledger,
        Err(err) => {
            tracing::warn!(error = %err, "discarding invalid ledger context");
            None
        }
    }
}
