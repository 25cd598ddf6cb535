//! Text output formatting for plain and pretty modes.

use ledger_state::tags::{Suggestion, TagList};
use ledger_state::SelectedLedger;

use crate::ui::{hint, kv, numbered, UiContext};

/// Lines describing the selected ledger.
pub fn ledger_lines(ctx: &UiContext, ledger: Option<&SelectedLedger>) -> Vec<String> {
    let Some(ledger) = ledger else {
        return vec![
            kv(ctx, "Selected", "no"),
            hint(ctx, "Run `ledger context set <ID> <NAME> <CURRENCY>`."),
        ];
    };

    let mut lines = vec![
        kv(ctx, "Ledger ID", &ledger.ledger_id),
        kv(ctx, "Name", &ledger.ledger_name),
        kv(ctx, "Currency", &ledger.currency_symbol),
    ];
    if let Some(description) = &ledger.description {
        lines.push(kv(ctx, "Description", description));
    }
    if let Some(notes) = &ledger.notes {
        lines.push(kv(ctx, "Notes", notes));
    }
    lines
}

pub fn print_ledger(ctx: &UiContext, ledger: Option<&SelectedLedger>) {
    for line in ledger_lines(ctx, ledger) {
        println!("{}", line);
    }
}

fn tag_label(name: &str, tag_id: Option<String>) -> String {
    match tag_id {
        Some(id) => format!("{} (#{})", name, id),
        None => name.to_string(),
    }
}

/// Numbered tag list, 1-based to match `:rm <N>`.
pub fn tags_block(ctx: &UiContext, tags: &TagList) -> String {
    let items: Vec<String> = tags
        .as_slice()
        .iter()
        .map(|tag| tag_label(&tag.name, tag.tag_id.as_ref().map(ToString::to_string)))
        .collect();
    numbered(ctx, &items, "(no tags)")
}

/// Numbered suggestion list, 1-based to match `:pick <N>`.
pub fn suggestions_block(ctx: &UiContext, suggestions: &[Suggestion]) -> String {
    let items: Vec<String> = suggestions
        .iter()
        .map(|s| tag_label(&s.name, s.tag_id.as_ref().map(ToString::to_string)))
        .collect();
    numbered(ctx, &items, "(no suggestions)")
}

/// Print one tag name per line, for scripts.
pub fn print_tag_names(tags: &TagList) {
    for name in tags.names() {
        println!("{}", name);
    }
}

pub fn print_suggestions(ctx: &UiContext, suggestions: &[Suggestion]) {
    if ctx.mode.is_pretty() {
        println!("{}", suggestions_block(ctx, suggestions));
    } else {
        for suggestion in suggestions {
            println!("{}\t{}", suggestion.tag_id, suggestion.name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;
    use ledger_state::tags::Tag;

    fn plain_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: false,
            mode: OutputMode::Plain,
        }
    }

    #[test]
    fn test_ledger_lines_include_optional_fields() {
        let ledger = SelectedLedger::new("L1", "Household", "$").with_notes("shared");
        let lines = ledger_lines(&plain_ctx(), Some(&ledger));
        assert_eq!(
            lines,
            vec![
                "ledger_id=L1",
                "name=Household",
                "currency=$",
                "notes=shared"
            ]
        );
    }

    #[test]
    fn test_ledger_lines_unselected_has_hint() {
        let lines = ledger_lines(&plain_ctx(), None);
        assert_eq!(lines[0], "selected=no");
        assert!(lines[1].starts_with("hint="));
    }

    #[test]
    fn test_tags_block_numbers_from_one() {
        let tags = TagList::from_inputs([Tag::new("rent"), Tag::with_id("employer", 1)]);
        assert_eq!(
            tags_block(&plain_ctx(), &tags),
            "  1. rent\n  2. employer (#1)"
        );
    }

    #[test]
    fn test_suggestions_block_empty() {
        assert_eq!(suggestions_block(&plain_ctx(), &[]), "(no suggestions)");
    }
}
