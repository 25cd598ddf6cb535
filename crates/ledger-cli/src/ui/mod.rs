//! UI primitives for the Ledger CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens and styles
//! - **Render**: Headers, key-value lines, hints, notifications

mod context;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::{parse_format, OutputMode};
pub use theme::Badge;

pub use render::{badge, header, hint, kv, notification, numbered, print_error};
