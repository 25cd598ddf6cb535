//! Input and parsing helper functions for the CLI.

mod parsing;

// Re-export public API
pub use parsing::{parse_session_line, parse_tags_json, SessionLine};
