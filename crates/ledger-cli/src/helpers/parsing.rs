//! Parsing helpers for tag arguments and interactive session lines.

use ledger_state::tags::TagInput;

use crate::errors::CliError;

/// One line of input in an interactive `tags input` session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionLine {
    /// The text field now holds this value
    Text(String),
    /// Enter pressed in the text field
    Enter,
    /// Select the Nth suggestion (0-based)
    Pick(usize),
    /// Remove the Nth tag (0-based)
    Remove(usize),
    /// Print the current state
    List,
    /// Finish the session
    Done,
}

/// Parse one session line.
///
/// Lines starting with `:` are commands and take 1-based indices. Anything
/// else (including an empty line) replaces the text field contents; use
/// `::` to type text that starts with a colon.
pub fn parse_session_line(line: &str) -> anyhow::Result<SessionLine> {
    let line = line.trim_end_matches(['\r', '\n']);
    if let Some(text) = line.strip_prefix("::") {
        return Ok(SessionLine::Text(format!(":{}", text)));
    }
    let Some(command) = line.strip_prefix(':') else {
        return Ok(SessionLine::Text(line.to_string()));
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();
    if parts.next().is_some() {
        return Err(CliError::invalid_input(format!("Too many arguments: {}", line)).into());
    }

    match (name, arg) {
        ("enter", None) => Ok(SessionLine::Enter),
        ("list", None) => Ok(SessionLine::List),
        ("done", None) => Ok(SessionLine::Done),
        ("pick", Some(n)) => Ok(SessionLine::Pick(parse_index(n)?)),
        ("rm", Some(n)) => Ok(SessionLine::Remove(parse_index(n)?)),
        ("pick" | "rm", None) => {
            Err(CliError::invalid_input(format!(":{} needs a number", name)).into())
        }
        _ => Err(CliError::invalid_input(format!(
            "Unknown command: {} (use :enter, :pick N, :rm N, :list or :done)",
            line
        ))
        .into()),
    }
}

/// Convert a 1-based index typed by the user to a 0-based one.
fn parse_index(value: &str) -> anyhow::Result<usize> {
    match value.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(CliError::invalid_input(format!(
            "Invalid index: {} (expected a number starting at 1)",
            value
        ))
        .into()),
    }
}

/// Parse `--tags-json`: an array of names or `{name, tag_id}` objects.
pub fn parse_tags_json(value: &str) -> anyhow::Result<Vec<TagInput>> {
    serde_json::from_str(value)
        .map_err(|e| CliError::invalid_input(format!("Invalid --tags-json: {}", e)).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger_state::tags::{Tag, TagList};

    #[test]
    fn test_plain_text_is_input_change() {
        assert_eq!(
            parse_session_line("emp\n").unwrap(),
            SessionLine::Text("emp".to_string())
        );
        assert_eq!(
            parse_session_line("").unwrap(),
            SessionLine::Text(String::new())
        );
    }

    #[test]
    fn test_escaped_colon() {
        assert_eq!(
            parse_session_line("::odd").unwrap(),
            SessionLine::Text(":odd".to_string())
        );
    }

    #[test]
    fn test_commands() {
        assert_eq!(parse_session_line(":enter").unwrap(), SessionLine::Enter);
        assert_eq!(parse_session_line(":list").unwrap(), SessionLine::List);
        assert_eq!(parse_session_line(":done").unwrap(), SessionLine::Done);
        assert_eq!(parse_session_line(":pick 2").unwrap(), SessionLine::Pick(1));
        assert_eq!(parse_session_line(":rm 1").unwrap(), SessionLine::Remove(0));
    }

    #[test]
    fn test_bad_commands() {
        assert!(parse_session_line(":pick").is_err());
        assert!(parse_session_line(":rm 0").is_err());
        assert!(parse_session_line(":rm x").is_err());
        assert!(parse_session_line(":pick 1 2").is_err());
        assert!(parse_session_line(":save").is_err());
    }

    #[test]
    fn test_tags_json_accepts_both_shapes() {
        let inputs = parse_tags_json(r#"["rent", {"name": "employer", "tag_id": 1}, "  "]"#)
            .unwrap();
        let tags = TagList::from_inputs(inputs);
        assert_eq!(
            tags.as_slice(),
            &[Tag::new("rent"), Tag::with_id("employer", 1)]
        );
    }

    #[test]
    fn test_tags_json_rejects_garbage() {
        assert!(parse_tags_json("{").is_err());
    }
}
