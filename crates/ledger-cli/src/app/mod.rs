//! Application-level utilities for the Ledger CLI.
//!
//! This module provides:
//! - Path and setting resolution (config file, session id, API URL)
//! - The `AppContext` that builds stores and clients on demand

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
pub use resolver::{resolve_api_url, resolve_config_path};
