//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::constants::LOG_ENV;

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "ledger_state=debug,ledger_cli=debug,warn"
    } else {
        "warn"
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays
/// parseable in `--json` mode.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "warn");
        assert!(default_directive(true).contains("ledger_state=debug"));
    }
}
