//! JSON output formatting.

use ledger_state::tags::{Suggestion, TagList};
use ledger_state::SelectedLedger;

/// Convert the selected ledger (or its absence) to JSON for output.
pub fn ledger_json(ledger: Option<&SelectedLedger>) -> serde_json::Value {
    match ledger {
        Some(ledger) => serde_json::json!({
            "selected": true,
            "ledger": ledger,
        }),
        None => serde_json::json!({
            "selected": false,
            "ledger": null,
        }),
    }
}

pub fn tags_json(tags: &TagList) -> serde_json::Value {
    serde_json::json!(tags)
}

pub fn suggestions_json(suggestions: &[Suggestion]) -> serde_json::Value {
    serde_json::json!(suggestions)
}

/// Print a JSON value to stdout.
pub fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
