use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::MissedTickBehavior;

use ledger_state::tags::{
    ChannelNotifier, DebounceConfig, Suggestion, SuggestionSource, TagInput, TagInputController,
    TagList,
};

use crate::app::AppContext;
use crate::cli::{InputArgs, SuggestArgs};
use crate::errors::from_ledger_error;
use crate::helpers::{parse_session_line, parse_tags_json, SessionLine};
use crate::output::{
    print_json, print_suggestions, print_tag_names, suggestions_block, suggestions_json,
    tags_block, tags_json,
};
use crate::ui::{self, Badge, UiContext};

use super::output_context;

/// How often the session checks for newly arrived suggestions.
const SUGGESTION_POLL: Duration = Duration::from_millis(50);

fn runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to start async runtime: {}", e))
}

/// One-shot suggestion fetch. Queries below the threshold print nothing.
pub fn handle_suggest(ctx: &AppContext, args: &SuggestArgs) -> anyhow::Result<()> {
    let ui = output_context(ctx, &args.output)?;
    let config = ctx.debounce_config()?;
    let query = args.query.trim();

    let suggestions = if query.chars().count() < config.min_query_len {
        tracing::debug!(query, "query below suggestion threshold");
        Vec::new()
    } else {
        let source = ctx.suggestion_source()?;
        runtime()?
            .block_on(source.suggest(query))
            .map_err(from_ledger_error)?
    };

    if ui.mode.is_json() {
        return print_json(&suggestions_json(&suggestions));
    }
    print_suggestions(&ui, &suggestions);
    Ok(())
}

/// Interactive tag editing driven by stdin lines.
pub fn handle_input(ctx: &AppContext, args: &InputArgs) -> anyhow::Result<()> {
    let ui = output_context(ctx, &args.output)?;
    let chatter = UiContext::for_stderr(ctx.cli().no_color);

    let initial: Vec<TagInput> = match &args.tags_json {
        Some(json) => parse_tags_json(json)?,
        None => args.tag.iter().map(|t| TagInput::from(t.as_str())).collect(),
    };
    let source: Arc<dyn SuggestionSource> = Arc::new(ctx.suggestion_source()?);
    let config = ctx.debounce_config()?;

    let tags = runtime()?.block_on(run_session(
        source,
        config,
        initial,
        &chatter,
        ctx.quiet(),
    ))?;

    if ui.mode.is_json() {
        return print_json(&tags_json(&tags));
    }
    if ui.mode.is_pretty() {
        println!("{}", tags_block(&ui, &tags));
    } else {
        print_tag_names(&tags);
    }
    Ok(())
}

async fn run_session(
    source: Arc<dyn SuggestionSource>,
    config: DebounceConfig,
    initial: Vec<TagInput>,
    ui: &UiContext,
    quiet: bool,
) -> anyhow::Result<TagList> {
    let (notifier, mut notifications) = ChannelNotifier::new();
    let mut controller = TagInputController::new(source, Arc::new(notifier))
        .with_config(config)
        .with_tags(initial);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut tick = tokio::time::interval(SUGGESTION_POLL);
    tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut shown: Vec<Suggestion> = Vec::new();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match parse_session_line(&line) {
                    Ok(SessionLine::Done) => break,
                    Ok(command) => apply(&mut controller, command, ui, quiet),
                    Err(err) => ui::print_error(ui, &err.to_string(), None),
                }
            }
            Some(notification) = notifications.recv() => {
                eprintln!("{}", ui::notification(ui, &notification));
            }
            _ = tick.tick() => {
                let current = controller.suggestions();
                if current != shown {
                    if !quiet && !current.is_empty() {
                        eprintln!("{}", suggestions_block(ui, &current));
                    }
                    shown = current;
                }
            }
        }
    }

    Ok(controller.take_tags())
}

fn apply(controller: &mut TagInputController, command: SessionLine, ui: &UiContext, quiet: bool) {
    match command {
        SessionLine::Text(text) => controller.on_input_change(text),
        SessionLine::Enter => {
            let input = controller.input();
            if controller.on_enter_key() && !quiet {
                let message = format!("Added {}", input.trim());
                eprintln!("{}", ui::badge(ui, Badge::Ok, &message));
            }
        }
        SessionLine::Pick(index) => match controller.pick_suggestion(index) {
            Ok(true) => {
                if !quiet {
                    eprintln!("{}", ui::badge(ui, Badge::Ok, "Added suggestion"));
                }
            }
            Ok(false) => {
                if !quiet {
                    eprintln!("{}", ui::badge(ui, Badge::Info, "Tag already present"));
                }
            }
            Err(_) => {
                let message = format!("No suggestion #{}", index + 1);
                ui::print_error(ui, &message, None);
            }
        },
        SessionLine::Remove(index) => match controller.remove_tag(index) {
            Ok(tag) => {
                if !quiet {
                    let message = format!("Removed {}", tag.name);
                    eprintln!("{}", ui::badge(ui, Badge::Ok, &message));
                }
            }
            Err(_) => {
                let message = format!("No tag #{}", index + 1);
                ui::print_error(ui, &message, None);
            }
        },
        SessionLine::List => {
            eprintln!("{}", ui::kv(ui, "Input", &controller.input()));
            eprintln!("{}", ui::kv(ui, "Phase", controller.phase().as_str()));
            eprintln!("Tags:\n{}", tags_block(ui, &controller.tags()));
            eprintln!(
                "Suggestions:\n{}",
                suggestions_block(ui, &controller.suggestions())
            );
        }
        SessionLine::Done => {}
    }
}
