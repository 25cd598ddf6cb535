use ledger_state::auth;

use crate::app::AppContext;
use crate::cli::OutputArgs;
use crate::errors::{from_ledger_error, CliError};
use crate::output::print_json;
use crate::ui::{self, Badge, UiContext};

use super::output_context;

pub fn handle_login(ctx: &AppContext, token: &str) -> anyhow::Result<()> {
    let token = token.trim();
    if token.is_empty() {
        return Err(CliError::invalid_input("--token cannot be empty").into());
    }

    ctx.token_store()?
        .set_token(token)
        .map_err(from_ledger_error)?;

    if !ctx.quiet() {
        let ui = UiContext::from_env(false, None, ctx.cli().no_color);
        println!("{}", ui::badge(&ui, Badge::Ok, "Token stored"));
    }
    Ok(())
}

pub fn handle_status(ctx: &AppContext, args: &OutputArgs) -> anyhow::Result<()> {
    let ui = output_context(ctx, args)?;
    let logged_in = ctx
        .token_store()?
        .token()
        .map_err(from_ledger_error)?
        .is_some();

    if ui.mode.is_json() {
        return print_json(&serde_json::json!({ "logged_in": logged_in }));
    }
    if logged_in {
        println!("{}", ui::kv(&ui, "Logged in", "yes"));
    } else {
        println!("{}", ui::kv(&ui, "Logged in", "no"));
        if !ctx.quiet() {
            println!("{}", ui::hint(&ui, "Run `ledger auth login --token <TOKEN>`."));
        }
    }
    Ok(())
}

/// Forget the token and the selected ledger of the active session.
pub fn handle_logout(ctx: &AppContext) -> anyhow::Result<()> {
    let tokens = ctx.token_store()?;
    let context = ctx.context_store()?;
    auth::logout(&tokens, &context).map_err(from_ledger_error)?;

    if !ctx.quiet() {
        let ui = UiContext::from_env(false, None, ctx.cli().no_color);
        println!("{}", ui::badge(&ui, Badge::Ok, "Logged out"));
    }
    Ok(())
}
