//! Ledger CLI - selected-ledger context, API token and tag input for the
//! Ledger personal-finance client.
//!
//! This is the command-line interface for Ledger. It drives the state
//! library the way a UI would: one process per action, with state restored
//! from session storage on every start.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;

use ledger_state::VERSION;

use crate::app::AppContext;
use crate::cli::Cli;
use crate::errors::CliError;
use crate::ui::UiContext;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = run(&cli) {
        let ui = UiContext::for_stderr(cli.no_color);
        let code = err
            .downcast_ref::<CliError>()
            .map(CliError::exit_code)
            .unwrap_or(1);
        ui::print_error(&ui, &format!("{:#}", err), None);
        std::process::exit(code);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let ctx = AppContext::new(cli);
    match &cli.command {
        Some(command) => commands::dispatch(&ctx, command),
        None => {
            println!("Ledger v{}", VERSION);
            println!("\nRun `ledger --help` for usage information.");
            Ok(())
        }
    }
}
