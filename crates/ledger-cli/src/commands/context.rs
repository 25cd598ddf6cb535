use ledger_state::SelectedLedger;

use crate::app::AppContext;
use crate::cli::{OutputArgs, SetContextArgs};
use crate::errors::from_ledger_error;
use crate::output::{ledger_json, print_json, print_ledger};
use crate::ui::{self, Badge, UiContext};

use super::output_context;

pub fn handle_show(ctx: &AppContext, args: &OutputArgs) -> anyhow::Result<()> {
    let ui = output_context(ctx, args)?;
    let store = ctx.context_store()?;
    let ledger = store.ledger();

    if ui.mode.is_json() {
        return print_json(&ledger_json(ledger.as_ref()));
    }
    if ui.mode.is_pretty() && !ctx.quiet() {
        println!("{}", ui::header(&ui, "context"));
    }
    print_ledger(&ui, ledger.as_ref());
    Ok(())
}

pub fn handle_set(ctx: &AppContext, args: &SetContextArgs) -> anyhow::Result<()> {
    let mut ledger = SelectedLedger::new(
        args.id.trim(),
        args.name.trim(),
        args.currency_symbol.trim(),
    );
    if let Some(description) = &args.description {
        ledger = ledger.with_description(description.as_str());
    }
    if let Some(notes) = &args.notes {
        ledger = ledger.with_notes(notes.as_str());
    }

    let store = ctx.context_store()?;
    store.set_ledger(ledger.clone()).map_err(from_ledger_error)?;

    if !ctx.quiet() {
        let ui = UiContext::from_env(false, None, ctx.cli().no_color);
        let message = format!("Selected {} ({})", ledger.ledger_name, ledger.ledger_id);
        println!("{}", ui::badge(&ui, Badge::Ok, &message));
    }
    Ok(())
}

pub fn handle_clear(ctx: &AppContext) -> anyhow::Result<()> {
    let store = ctx.context_store()?;
    store.clear_ledger().map_err(from_ledger_error)?;

    if !ctx.quiet() {
        let ui = UiContext::from_env(false, None, ctx.cli().no_color);
        println!("{}", ui::badge(&ui, Badge::Ok, "Cleared selected ledger"));
    }
    Ok(())
}
