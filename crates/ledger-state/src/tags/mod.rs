//! Tag input state for transaction forms.
//!
//! This module provides:
//! - **types**: `Tag`, `Suggestion`, and the `TagInput` boundary shape
//! - **list**: the name-unique `TagList`
//! - **controller**: debounced suggestion fetching with last-query-wins ordering
//! - **suggest**: the `SuggestionSource` and `Notifier` seams

mod controller;
mod list;
mod suggest;
mod types;

pub use controller::{
    DebounceConfig, InputPhase, TagInputController, DEFAULT_DEBOUNCE, DEFAULT_MIN_QUERY_LEN,
    FETCH_FAILED_MESSAGE,
};
pub use list::TagList;
pub use suggest::{
    ChannelNotifier, Notification, NotificationLevel, Notifier, SuggestionSource, TracingNotifier,
};
pub use types::{Suggestion, Tag, TagId, TagInput};
