//! Output mode routing.

use crate::errors::CliError;

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One JSON document, nothing else
    Json,
    /// `key=value` lines and bare lists, stable for scripts
    #[default]
    Plain,
    /// Labelled, numbered and (on a color terminal) styled
    Pretty,
}

impl OutputMode {
    /// Pick the mode from `--json`, a validated `--format`, and the terminal.
    ///
    /// `--json` wins outright. An explicit format comes next. Otherwise a
    /// TTY gets pretty output unless `TERM=dumb`.
    pub fn resolve(
        json_flag: bool,
        format_flag: Option<&str>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> Self {
        match (json_flag, format_flag) {
            (true, _) => Self::Json,
            (false, Some("plain")) => Self::Plain,
            (false, Some("pretty")) => Self::Pretty,
            _ if is_tty && !term_is_dumb => Self::Pretty,
            _ => Self::Plain,
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

/// Validate a `--format` value.
pub fn parse_format(value: Option<&str>) -> anyhow::Result<Option<&str>> {
    match value {
        None => Ok(None),
        Some(v @ ("plain" | "pretty")) => Ok(Some(v)),
        Some(other) => Err(CliError::invalid_input(format!(
            "Invalid format: {} (use pretty or plain)",
            other
        ))
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_beats_format() {
        assert_eq!(
            OutputMode::resolve(true, Some("pretty"), true, false),
            OutputMode::Json
        );
    }

    #[test]
    fn test_explicit_format_ignores_terminal() {
        assert_eq!(
            OutputMode::resolve(false, Some("plain"), true, false),
            OutputMode::Plain
        );
        assert_eq!(
            OutputMode::resolve(false, Some("pretty"), false, false),
            OutputMode::Pretty
        );
    }

    #[test]
    fn test_terminal_detection() {
        assert_eq!(
            OutputMode::resolve(false, None, true, false),
            OutputMode::Pretty
        );
        assert_eq!(
            OutputMode::resolve(false, None, true, true),
            OutputMode::Plain
        );
        assert_eq!(
            OutputMode::resolve(false, None, false, false),
            OutputMode::Plain
        );
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format(Some("plain")).unwrap(), Some("plain"));
        assert_eq!(parse_format(None).unwrap(), None);
        assert!(parse_format(Some("table")).is_err());
    }
}
