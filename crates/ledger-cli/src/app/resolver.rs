//! Path and setting resolution for the CLI.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{default_config_path, read_config, LedgerConfig};
use crate::constants::DEFAULT_SESSION_ID;

/// Resolve the config file path, checking LEDGER_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("LEDGER_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config file, or defaults when it does not exist.
pub fn load_config() -> anyhow::Result<LedgerConfig> {
    let path = resolve_config_path()?;
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(LedgerConfig::default());
    }
    read_config(&path)
}

/// Resolve the session id: `--session` flag, then config, then the default.
pub fn resolve_session_id(cli: &Cli, config: &LedgerConfig) -> String {
    non_blank(cli.session.as_deref())
        .or_else(|| non_blank(config.session.id.as_deref()))
        .unwrap_or(DEFAULT_SESSION_ID)
        .to_string()
}

/// Resolve the API base URL: `--api-url` flag, then config.
pub fn resolve_api_url<'a>(cli: &'a Cli, config: &'a LedgerConfig) -> Option<&'a str> {
    non_blank(cli.api_url.as_deref()).or_else(|| non_blank(config.api.base_url.as_deref()))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Error message when no API URL is configured.
pub fn missing_api_url_message() -> (&'static str, &'static str) {
    (
        "No API URL configured",
        "Hint: Pass --api-url, set LEDGER_API_URL, or add [api] base_url to the config file.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_session_precedence() {
        let mut config = LedgerConfig::default();
        let cli = Cli::parse_from(["ledger"]);
        assert_eq!(resolve_session_id(&cli, &config), DEFAULT_SESSION_ID);

        config.session.id = Some("from-config".to_string());
        assert_eq!(resolve_session_id(&cli, &config), "from-config");

        let cli = Cli::parse_from(["ledger", "--session", "from-flag"]);
        assert_eq!(resolve_session_id(&cli, &config), "from-flag");
    }

    #[test]
    fn test_blank_api_url_is_ignored() {
        let mut config = LedgerConfig::default();
        config.api.base_url = Some("http://config.test/api".to_string());
        let cli = Cli::parse_from(["ledger", "--api-url", "  "]);
        assert_eq!(
            resolve_api_url(&cli, &config),
            Some("http://config.test/api")
        );
    }
}
