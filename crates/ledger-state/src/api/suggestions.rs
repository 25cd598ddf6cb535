//! Tag suggestion endpoint.

use async_trait::async_trait;

use super::client::ApiClient;
use crate::error::Result;
use crate::tags::{Suggestion, SuggestionSource};

/// Path of the suggestion endpoint, relative to the API base URL.
pub const SUGGESTIONS_PATH: &str = "tags/suggestions";

/// `SuggestionSource` backed by `GET /tags/suggestions?query=...`.
#[derive(Clone)]
pub struct HttpSuggestionSource {
    client: ApiClient,
}

impl HttpSuggestionSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SuggestionSource for HttpSuggestionSource {
    async fn suggest(&self, query: &str) -> Result<Vec<Suggestion>> {
        self.client
            .get(SUGGESTIONS_PATH, &[("query", query)])
            .await
    }
}
