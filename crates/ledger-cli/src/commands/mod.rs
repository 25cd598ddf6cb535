//! Command handlers, one module per command group.

pub mod auth;
pub mod config;
pub mod context;
pub mod misc;
pub mod tags;

use crate::app::AppContext;
use crate::cli::{
    AuthCommand, Commands, ConfigCommand, ContextCommand, OutputArgs, TagsCommand,
};
use crate::errors::CliError;
use crate::ui::{parse_format, UiContext};

/// Resolve the output context for a command's `--json`/`--format` flags.
pub(crate) fn output_context(ctx: &AppContext, args: &OutputArgs) -> anyhow::Result<UiContext> {
    let format = parse_format(args.format.as_deref())?;
    if args.json && format.is_some() {
        return Err(CliError::invalid_input("--format cannot be used with --json").into());
    }
    Ok(UiContext::from_env(args.json, format, ctx.cli().no_color))
}

pub fn dispatch(ctx: &AppContext, command: &Commands) -> anyhow::Result<()> {
    match command {
        Commands::Context { command } => match command {
            ContextCommand::Show(args) => context::handle_show(ctx, args),
            ContextCommand::Set(args) => context::handle_set(ctx, args),
            ContextCommand::Clear => context::handle_clear(ctx),
        },
        Commands::Auth { command } => match command {
            AuthCommand::Login { token } => auth::handle_login(ctx, token),
            AuthCommand::Status(args) => auth::handle_status(ctx, args),
            AuthCommand::Logout => auth::handle_logout(ctx),
        },
        Commands::Tags { command } => match command {
            TagsCommand::Suggest(args) => tags::handle_suggest(ctx, args),
            TagsCommand::Input(args) => tags::handle_input(ctx, args),
        },
        Commands::Config { command } => match command {
            ConfigCommand::Show(args) => config::handle_show(ctx, args),
            ConfigCommand::Init { force } => config::handle_init(ctx, *force),
        },
        Commands::Completions { shell } => misc::handle_completions(*shell),
    }
}
