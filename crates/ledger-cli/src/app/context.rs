//! Application context for the Ledger CLI.
//!
//! Provides a unified context that combines CLI arguments with
//! lazily-loaded configuration and the storage scopes built from it.

use std::sync::Arc;

use once_cell::unsync::OnceCell;

use ledger_state::api::{ApiClient, HttpSuggestionSource};
use ledger_state::auth::TokenStore;
use ledger_state::storage::{FileStore, KeyValueStore};
use ledger_state::tags::DebounceConfig;
use ledger_state::LedgerContextStore;

use crate::cli::Cli;
use crate::config::LedgerConfig;
use crate::errors::{from_ledger_error, CliError};

use super::resolver::{load_config, missing_api_url_message, resolve_api_url, resolve_session_id};

/// Application context that bundles CLI args with configuration.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<LedgerConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&LedgerConfig> {
        self.config.get_or_try_init(load_config)
    }

    pub fn session_id(&self) -> anyhow::Result<String> {
        Ok(resolve_session_id(self.cli, self.config()?))
    }

    /// Session-scoped storage for the active session.
    pub fn session_store(&self) -> anyhow::Result<FileStore> {
        let id = self.session_id()?;
        FileStore::session(&id).map_err(from_ledger_error)
    }

    /// Durable storage shared by all sessions.
    pub fn local_store(&self) -> anyhow::Result<Arc<dyn KeyValueStore>> {
        Ok(Arc::new(FileStore::local().map_err(from_ledger_error)?))
    }

    /// Restore the selected-ledger store for the active session.
    pub fn context_store(&self) -> anyhow::Result<LedgerContextStore> {
        let store: Arc<dyn KeyValueStore> = Arc::new(self.session_store()?);
        Ok(LedgerContextStore::restore(store))
    }

    pub fn token_store(&self) -> anyhow::Result<TokenStore> {
        Ok(TokenStore::new(self.local_store()?))
    }

    /// Build the backend client, failing with a hint when no URL is set.
    pub fn api_client(&self) -> anyhow::Result<ApiClient> {
        let config = self.config()?;
        let Some(base_url) = resolve_api_url(self.cli, config) else {
            let (message, hint) = missing_api_url_message();
            return Err(CliError::not_found(message, hint).into());
        };
        ApiClient::new(base_url, self.token_store()?).map_err(from_ledger_error)
    }

    pub fn suggestion_source(&self) -> anyhow::Result<HttpSuggestionSource> {
        Ok(HttpSuggestionSource::new(self.api_client()?))
    }

    pub fn debounce_config(&self) -> anyhow::Result<DebounceConfig> {
        Ok(self.config()?.tags.debounce_config())
    }
}
