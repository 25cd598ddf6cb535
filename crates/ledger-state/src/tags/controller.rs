//! Tag input controller.
//!
//! Owns the tag list of the transaction being edited, the live input text,
//! and the suggestion list. Keystrokes restart a debounce timer; when it
//! fires, one suggestion query is issued for the trimmed input.
//!
//! Queries are numbered. A fetch result is applied only if no newer query
//! has been issued since, so a slow response can never overwrite fresher
//! suggestions regardless of the order responses arrive in.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;

use super::list::TagList;
use super::suggest::{Notification, Notifier, SuggestionSource};
use super::types::{Suggestion, Tag, TagInput};
use crate::error::{LedgerError, Result};

/// Default pause before a suggestion query is issued.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Default minimum trimmed input length (in characters) worth querying.
pub const DEFAULT_MIN_QUERY_LEN: usize = 3;

/// Message shown to the user when a suggestion query fails.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch tag suggestions.";

/// Timing knobs for suggestion queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceConfig {
    pub delay: Duration,
    pub min_query_len: usize,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DEBOUNCE,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
        }
    }
}

/// Where the input session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPhase {
    /// Nothing pending
    Idle,
    /// Debounce timer running
    Typing,
    /// Latest query issued, waiting for the response
    Fetching,
    /// Suggestions from the latest query are shown
    Suggesting,
}

impl InputPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Typing => "typing",
            Self::Fetching => "fetching",
            Self::Suggesting => "suggesting",
        }
    }
}

#[derive(Debug)]
struct ControllerState {
    input: String,
    tags: TagList,
    suggestions: Vec<Suggestion>,
    phase: InputPhase,
    /// Sequence number of the most recently issued query.
    latest_query: u64,
}

impl ControllerState {
    fn new(tags: TagList) -> Self {
        Self {
            input: String::new(),
            tags,
            suggestions: Vec::new(),
            phase: InputPhase::Idle,
            latest_query: 0,
        }
    }

    /// Clear suggestions and invalidate any fetch still in flight.
    fn dismiss_suggestions(&mut self) {
        self.latest_query += 1;
        self.suggestions.clear();
        self.phase = InputPhase::Idle;
    }
}

type SharedState = Arc<Mutex<ControllerState>>;

fn lock(state: &SharedState) -> MutexGuard<'_, ControllerState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Controller behind a tag input widget.
///
/// Timer and fetch tasks are spawned on the ambient tokio runtime, so the
/// input handlers must be called from within one.
pub struct TagInputController {
    state: SharedState,
    source: Arc<dyn SuggestionSource>,
    notifier: Arc<dyn Notifier>,
    config: DebounceConfig,
    timer: Option<JoinHandle<()>>,
}

impl TagInputController {
    pub fn new(source: Arc<dyn SuggestionSource>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            state: Arc::new(Mutex::new(ControllerState::new(TagList::new()))),
            source,
            notifier,
            config: DebounceConfig::default(),
            timer: None,
        }
    }

    pub fn with_config(mut self, config: DebounceConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed the list with the tags already on the transaction.
    pub fn with_tags<I, T>(self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TagInput>,
    {
        lock(&self.state).tags = TagList::from_inputs(tags);
        self
    }

    pub fn config(&self) -> DebounceConfig {
        self.config
    }

    /// Append an ad-hoc tag and clear the input.
    ///
    /// A blank or already-present name is ignored and the input is left as is.
    pub fn add_tag(&mut self, name: &str) -> bool {
        let mut state = lock(&self.state);
        let added = state.tags.add(name);
        if added {
            state.input.clear();
            tracing::debug!(tag = name.trim(), "added tag");
        }
        added
    }

    /// Append a server-known tag, then clear the input and the suggestions.
    pub fn add_tag_from_suggestion(&mut self, suggestion: &Suggestion) -> bool {
        self.cancel_timer();
        let mut state = lock(&self.state);
        let added = state.tags.add_suggestion(suggestion);
        state.input.clear();
        state.dismiss_suggestions();
        added
    }

    /// Select the suggestion at `index` in the currently shown list.
    pub fn pick_suggestion(&mut self, index: usize) -> Result<bool> {
        let suggestion = lock(&self.state)
            .suggestions
            .get(index)
            .cloned()
            .ok_or_else(|| {
                LedgerError::InvalidInput(format!("No suggestion at position {}", index))
            })?;
        Ok(self.add_tag_from_suggestion(&suggestion))
    }

    /// Remove the tag at `index`.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidInput` for an out-of-range index; the
    /// list is not modified.
    pub fn remove_tag(&mut self, index: usize) -> Result<Tag> {
        lock(&self.state).tags.remove(index)
    }

    /// Record a change of the input text and restart the debounce timer.
    pub fn on_input_change(&mut self, text: impl Into<String>) {
        self.cancel_timer();
        {
            let mut state = lock(&self.state);
            state.input = text.into();
            state.phase = InputPhase::Typing;
        }

        let state = Arc::clone(&self.state);
        let source = Arc::clone(&self.source);
        let notifier = Arc::clone(&self.notifier);
        let config = self.config;
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(config.delay).await;
            issue_query(state, source, notifier, config.min_query_len);
        }));
    }

    /// Enter key: add the trimmed input as a tag, then clear the suggestions.
    pub fn on_enter_key(&mut self) -> bool {
        self.cancel_timer();
        let input = lock(&self.state).input.trim().to_string();
        let added = self.add_tag(&input);
        lock(&self.state).dismiss_suggestions();
        added
    }

    pub fn input(&self) -> String {
        lock(&self.state).input.clone()
    }

    pub fn tags(&self) -> TagList {
        lock(&self.state).tags.clone()
    }

    pub fn suggestions(&self) -> Vec<Suggestion> {
        lock(&self.state).suggestions.clone()
    }

    pub fn phase(&self) -> InputPhase {
        lock(&self.state).phase
    }

    /// Hand the tag list to the owning form, leaving this controller empty.
    pub fn take_tags(&mut self) -> TagList {
        std::mem::take(&mut lock(&self.state).tags)
    }

    /// Consume the controller, cancelling any pending timer, and return the tags.
    pub fn into_tags(mut self) -> TagList {
        self.take_tags()
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Drop for TagInputController {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

/// Debounce timer fired: issue a query for the current input, or clear the
/// suggestions when the input is too short.
fn issue_query(
    state: SharedState,
    source: Arc<dyn SuggestionSource>,
    notifier: Arc<dyn Notifier>,
    min_query_len: usize,
) {
    let (seq, query) = {
        let mut guard = lock(&state);
        let query = guard.input.trim().to_string();
        if query.chars().count() < min_query_len {
            guard.dismiss_suggestions();
            tracing::trace!(query = %query, "input below suggestion threshold");
            return;
        }
        guard.latest_query += 1;
        guard.phase = InputPhase::Fetching;
        (guard.latest_query, query)
    };

    // Detached from the timer so a later keystroke cannot abort it; stale
    // results are dropped by sequence number instead.
    tokio::spawn(async move {
        tracing::debug!(seq, query = %query, "fetching tag suggestions");
        let result = source.suggest(&query).await;

        let mut guard = lock(&state);
        if guard.latest_query != seq {
            tracing::debug!(
                seq,
                latest = guard.latest_query,
                "discarding superseded suggestions"
            );
            return;
        }

        match result {
            Ok(suggestions) => {
                if guard.phase == InputPhase::Fetching {
                    guard.phase = if suggestions.is_empty() {
                        InputPhase::Idle
                    } else {
                        InputPhase::Suggesting
                    };
                }
                guard.suggestions = suggestions;
            }
            Err(err) => {
                guard.suggestions.clear();
                if guard.phase == InputPhase::Fetching {
                    guard.phase = InputPhase::Idle;
                }
                drop(guard);
                tracing::warn!(query = %query, error = %err, "tag suggestion query failed");
                notifier.notify(Notification::warning(FETCH_FAILED_MESSAGE));
            }
        }
    });
}
