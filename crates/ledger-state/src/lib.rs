//! # Ledger State
//!
//! Client-side state for the Ledger personal-finance app, independent of
//! any particular UI.
//!
//! ## Architecture
//!
//! - **tags**: tag input controller with debounced, last-query-wins suggestions
//! - **context**: the selected-ledger store, persisted to session storage
//! - **storage**: session-scoped and durable key-value stores
//! - **auth**: bearer token source and logout
//! - **api**: HTTP collaborators (suggestion endpoint)

pub mod api;
pub mod auth;
pub mod context;
pub mod error;
pub mod fs;
pub mod storage;
pub mod tags;

pub use context::{LedgerContextStore, SelectedLedger};
pub use error::{LedgerError, Result};
pub use storage::KeyValueStore;
pub use tags::{Tag, TagInputController, TagList};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
