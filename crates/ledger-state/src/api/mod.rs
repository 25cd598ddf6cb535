//! Backend HTTP collaborators.

mod client;
mod suggestions;

pub use client::{ApiClient, REQUEST_TIMEOUT};
pub use suggestions::{HttpSuggestionSource, SUGGESTIONS_PATH};
