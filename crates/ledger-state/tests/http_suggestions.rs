use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::Query;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use ledger_state::api::{ApiClient, HttpSuggestionSource};
use ledger_state::auth::TokenStore;
use ledger_state::storage::MemoryStore;
use ledger_state::tags::{
    ChannelNotifier, DebounceConfig, InputPhase, Suggestion, SuggestionSource, TagId,
    TagInputController,
};
use ledger_state::LedgerError;

const TOKEN: &str = "secret-token";

const KNOWN_TAGS: &[(&str, i64)] = &[("employer", 1), ("employee", 2), ("rent", 3)];

async fn suggestions(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, StatusCode> {
    let expected = format!("Bearer {}", TOKEN);
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v == expected)
        .unwrap_or(false);
    if !authorized {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let query = params.get("query").cloned().unwrap_or_default();
    let matches: Vec<Value> = KNOWN_TAGS
        .iter()
        .filter(|(name, _)| name.starts_with(&query))
        .map(|(name, id)| json!({ "name": name, "tag_id": id }))
        .collect();
    Ok(Json(Value::Array(matches)))
}

async fn broken() -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": "database unavailable" })),
    )
}

async fn spawn_backend() -> String {
    let router = Router::new()
        .route("/api/tags/suggestions", get(suggestions))
        .route("/broken/tags/suggestions", get(broken));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind should succeed");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server should run");
    });
    format!("http://{}", addr)
}

fn token_store(token: Option<&str>) -> TokenStore {
    let tokens = TokenStore::new(Arc::new(MemoryStore::new()));
    if let Some(token) = token {
        tokens.set_token(token).expect("set token");
    }
    tokens
}

#[tokio::test]
async fn test_suggestions_sent_with_bearer_token() {
    let base = spawn_backend().await;
    let client = ApiClient::new(&format!("{}/api", base), token_store(Some(TOKEN))).unwrap();
    let source = HttpSuggestionSource::new(client);

    let found = source.suggest("empl").await.expect("suggest should succeed");

    assert_eq!(
        found,
        vec![
            Suggestion::new("employer", 1),
            Suggestion::new("employee", 2),
        ]
    );
    assert_eq!(found[0].tag_id, Some(TagId::Number(1)));
}

#[tokio::test]
async fn test_unauthorized_clears_token() {
    let base = spawn_backend().await;
    let tokens = token_store(Some("stale-token"));
    let client = ApiClient::new(&format!("{}/api", base), tokens.clone()).unwrap();
    let source = HttpSuggestionSource::new(client);

    let err = source.suggest("rent").await.unwrap_err();

    assert!(matches!(err, LedgerError::Unauthorized(_)));
    assert_eq!(tokens.token().unwrap(), None);
}

#[tokio::test]
async fn test_server_error_carries_message() {
    let base = spawn_backend().await;
    let client = ApiClient::new(&format!("{}/broken", base), token_store(None)).unwrap();
    let source = HttpSuggestionSource::new(client);

    let err = source.suggest("rent").await.unwrap_err();

    match err {
        LedgerError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "database unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_controller_against_live_endpoint() {
    let base = spawn_backend().await;
    let client = ApiClient::new(&format!("{}/api", base), token_store(Some(TOKEN))).unwrap();
    let (notifier, mut notifications) = ChannelNotifier::new();
    let mut controller = TagInputController::new(
        Arc::new(HttpSuggestionSource::new(client)),
        Arc::new(notifier),
    )
    .with_config(DebounceConfig {
        delay: Duration::from_millis(20),
        min_query_len: 3,
    });

    controller.on_input_change("ren");
    for _ in 0..100 {
        if controller.phase() == InputPhase::Suggesting {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    assert_eq!(controller.suggestions(), vec![Suggestion::new("rent", 3)]);
    assert!(controller.pick_suggestion(0).unwrap());
    assert_eq!(controller.tags().as_slice()[0].tag_id, Some(TagId::Number(3)));
    assert!(notifications.try_recv().is_err());
}
