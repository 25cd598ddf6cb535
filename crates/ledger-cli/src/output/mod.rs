//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying the ledger
//! context, tag lists and suggestions in JSON or text form.

mod json;
mod text;

// Re-export public API
pub use json::{ledger_json, print_json, suggestions_json, tags_json};
pub use text::{
    print_ledger, print_suggestions, print_tag_names, suggestions_block, tags_block,
};
