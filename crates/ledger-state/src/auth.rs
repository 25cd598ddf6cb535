//! Bearer token source and logout.

use std::sync::Arc;

use crate::context::LedgerContextStore;
use crate::error::Result;
use crate::storage::KeyValueStore;

/// Durable storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Reads and writes the bearer token in durable storage.
#[derive(Clone)]
pub struct TokenStore {
    storage: Arc<dyn KeyValueStore>,
}

impl TokenStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// The stored token, if any. Blank values count as absent.
    pub fn token(&self) -> Result<Option<String>> {
        Ok(self
            .storage
            .get(TOKEN_KEY)?
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty()))
    }

    pub fn set_token(&self, token: &str) -> Result<()> {
        self.storage.set(TOKEN_KEY, token.trim())
    }

    pub fn clear(&self) -> Result<()> {
        self.storage.remove(TOKEN_KEY)
    }
}

/// End the user's session: forget the token and the selected ledger.
///
/// Both are attempted even if the first fails; the first error is returned.
pub fn logout(tokens: &TokenStore, context: &LedgerContextStore) -> Result<()> {
    let token_result = tokens.clear();
    let context_result = context.clear_ledger();
    tracing::info!("logged out");
    token_result.and(context_result)
}
