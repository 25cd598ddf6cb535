//! HTTP client for the ledger backend.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::auth::TokenStore;
use crate::error::{LedgerError, Result};

/// Timeout applied to every request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Error body shape returned by the backend.
#[derive(serde::Deserialize)]
struct ApiErrorResponse {
    #[serde(alias = "error")]
    message: String,
}

/// JSON-over-HTTP client that attaches the stored bearer token.
///
/// A 401 from any request clears the stored token so the next run asks the
/// user to authenticate again.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    tokens: TokenStore,
}

impl ApiClient {
    pub fn new(base_url: &str, tokens: TokenStore) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(LedgerError::InvalidInput(
                "API base URL must not be empty".to_string(),
            ));
        }
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.to_string(),
            tokens,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base_url}/{path}` with the given query pairs.
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = self.url(path);
        let request = self.authorize(self.client.get(&url).query(query))?;
        tracing::debug!(url = %url, "GET");
        let response = request.send().await?;
        self.handle_response(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        Ok(match self.tokens.token()? {
            Some(token) => request.bearer_auth(token),
            None => request,
        })
    }

    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            if let Err(err) = self.tokens.clear() {
                tracing::warn!(error = %err, "failed to clear rejected token");
            }
            return Err(LedgerError::Unauthorized(
                "session expired; log in again".to_string(),
            ));
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorResponse>(&text)
                .map(|body| body.message)
                .unwrap_or(text);
            return Err(LedgerError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::storage::MemoryStore;

    fn tokens() -> TokenStore {
        TokenStore::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_base_url_is_normalized() {
        let client = ApiClient::new(" http://localhost:8080/api/ ", tokens()).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/api");
        assert_eq!(client.url("/tags/suggestions"), "http://localhost:8080/api/tags/suggestions");
    }

    #[test]
    fn test_empty_base_url_rejected() {
        assert!(matches!(
            ApiClient::new("  ", tokens()),
            Err(LedgerError::InvalidInput(_))
        ));
    }
}
