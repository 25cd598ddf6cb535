use crate::app::{resolve_api_url, resolve_config_path, AppContext};
use crate::cli::OutputArgs;
use crate::config::{write_config, LedgerConfig};
use crate::errors::CliError;
use crate::output::print_json;
use crate::ui::{self, Badge, UiContext};

use super::output_context;

/// Print the effective configuration after flag overrides.
pub fn handle_show(ctx: &AppContext, args: &OutputArgs) -> anyhow::Result<()> {
    let ui = output_context(ctx, args)?;
    let config = ctx.config()?;
    let path = resolve_config_path()?;
    let session_id = ctx.session_id()?;
    let api_url = resolve_api_url(ctx.cli(), config);

    if ui.mode.is_json() {
        return print_json(&serde_json::json!({
            "path": path,
            "exists": path.exists(),
            "api_url": api_url,
            "session_id": session_id,
            "debounce_ms": config.tags.debounce_ms,
            "min_query_len": config.tags.min_query_len,
        }));
    }

    println!("{}", ui::kv(&ui, "Config", &path.display().to_string()));
    println!("{}", ui::kv(&ui, "API URL", api_url.unwrap_or("(not set)")));
    println!("{}", ui::kv(&ui, "Session", &session_id));
    println!(
        "{}",
        ui::kv(&ui, "Debounce ms", &config.tags.debounce_ms.to_string())
    );
    println!(
        "{}",
        ui::kv(&ui, "Min query len", &config.tags.min_query_len.to_string())
    );
    Ok(())
}

/// Write a default config file.
pub fn handle_init(ctx: &AppContext, force: bool) -> anyhow::Result<()> {
    let path = resolve_config_path()?;
    if path.exists() && !force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        ))
        .into());
    }

    let mut config = LedgerConfig::default();
    config.api.base_url = ctx.cli().api_url.clone();
    write_config(&path, &config)?;

    if !ctx.quiet() {
        let ui = UiContext::from_env(false, None, ctx.cli().no_color);
        let message = format!("Wrote {}", path.display());
        println!("{}", ui::badge(&ui, Badge::Ok, &message));
    }
    Ok(())
}
