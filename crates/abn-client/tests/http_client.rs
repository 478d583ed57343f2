//! Integration tests for the HTTP client against a stub upstream
#![cfg_attr(
    test,
    allow(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::missing_panics_doc,
        clippy::tests_outside_test_module,
        reason = "Test allows"
    )
)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use abn_client::{DEFAULT_TIMEOUT, HttpLookupClient};
use abn_core::{DisplayState, LookupError, LookupService as _, SearchResult};
use axum::{Json, Router};
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse as _, Response};
use axum::routing::get;
use serde_json::json;
use tokio::net::TcpListener;
use tokio::time::sleep;

async fn lookup(Path(abn): Path<String>) -> Response {
    match abn.as_str() {
        "12345678901" => Json(json!({
            "abn": "12345678901",
            "entityName": "ACME PTY LTD",
            "entityType": "Australian Private Company",
            "gstStatus": "Registered",
            "abrStatus": "Active",
            "mode": "live",
            "timestamp": "2024-05-01T03:04:05Z"
        }))
        .into_response(),
        "11111111111" => Json(json!({
            "error": true,
            "message": "ABN not found",
            "abn": "11111111111",
            "mode": "live"
        }))
        .into_response(),
        "22222222222" => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "error": "UNAVAILABLE", "message": "Registry offline" })),
        )
            .into_response(),
        "33333333333" => (StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>").into_response(),
        "44444444444" => "definitely not json".into_response(),
        "55555555555" => {
            sleep(Duration::from_secs(5)).await;
            Json(json!({})).into_response()
        }
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn search(Query(params): Query<HashMap<String, String>>) -> Response {
    let name = params.get("name").cloned().unwrap_or_default();
    match name.as_str() {
        "Acme Pty Ltd" => Json(json!({ "results": [{ "name": "ACME PTY LTD" }] })).into_response(),
        "Bare Array Pty Ltd" => Json(json!([{ "name": "ACME PTY LTD" }])).into_response(),
        "Flagged Failure" => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": true })),
        )
            .into_response(),
        _ => Json(json!({ "results": [], "searchTerm": name })).into_response(),
    }
}

async fn spawn_upstream() -> SocketAddr {
    let app = Router::new()
        .route("/microsvc/BUSINESS/ABN_LOOKUP_SERVICE/lookup/:abn", get(lookup))
        .route("/microsvc/BUSINESS/ABN_NAME_SEARCH/search", get(search));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await });
    addr
}

async fn client() -> HttpLookupClient {
    let addr = spawn_upstream().await;
    HttpLookupClient::new(format!("http://{addr}"), DEFAULT_TIMEOUT).unwrap()
}

#[tokio::test]
async fn test_identifier_lookup_success() {
    let client = client().await;
    let result = client.search("12 345 678 901").await.unwrap();

    let DisplayState::IdentifierFound(record) = DisplayState::from_result(&result, "12 345 678 901")
    else {
        panic!("expected a business record, got {result:?}");
    };
    assert_eq!(record.abn, "12345678901");
    assert_eq!(record.entity_name, "ACME PTY LTD");
    assert_eq!(record.mode, "live");
    assert!(!record.retrieved.is_empty());
}

#[tokio::test]
async fn test_identifier_lookup_service_reported_error() {
    let client = client().await;
    let result = client.search("11111111111").await.unwrap();

    assert_eq!(
        DisplayState::from_result(&result, "11111111111"),
        DisplayState::IdentifierError {
            message: "ABN not found".to_owned(),
            abn: "11111111111".to_owned(),
            mode: "live".to_owned(),
        }
    );
}

#[tokio::test]
async fn test_failure_status_with_structured_body() {
    let client = client().await;
    let error = client.search("22222222222").await.unwrap_err();

    assert_eq!(
        error,
        LookupError::Service {
            status: 503,
            message: "Registry offline".to_owned(),
        }
    );
    assert_eq!(error.user_message(), "Error: Registry offline");
}

#[tokio::test]
async fn test_failure_status_without_structured_body() {
    let client = client().await;
    let error = client.search("33333333333").await.unwrap_err();
    assert!(matches!(error, LookupError::Unreachable(_)), "{error:?}");
}

#[tokio::test]
async fn test_success_with_undecodable_body() {
    let client = client().await;
    let error = client.search("44444444444").await.unwrap_err();
    assert!(matches!(error, LookupError::Decode(_)), "{error:?}");
    assert_eq!(error.user_message(), "Error: Search failed");
}

#[tokio::test]
async fn test_name_search_taken() {
    let client = client().await;
    let result = client.search("Acme Pty Ltd").await.unwrap();
    assert_eq!(
        DisplayState::from_result(&result, "Acme Pty Ltd"),
        DisplayState::NameTaken("Acme Pty Ltd".to_owned())
    );
}

#[tokio::test]
async fn test_name_search_array_body_has_no_error_field() {
    let client = client().await;
    let result = client.search("Bare Array Pty Ltd").await.unwrap();

    assert_eq!(
        DisplayState::from_result(&result, "Bare Array Pty Ltd"),
        DisplayState::NameAvailable("Bare Array Pty Ltd".to_owned())
    );
}

#[tokio::test]
async fn test_failure_status_with_boolean_error_field() {
    let client = client().await;
    let error = client.search("Flagged Failure").await.unwrap_err();

    assert_eq!(
        error,
        LookupError::Service {
            status: 500,
            message: "true".to_owned(),
        }
    );
    assert_eq!(error.user_message(), "Error: true");
}

#[tokio::test]
async fn test_name_search_round_trips_raw_text() {
    let client = client().await;
    let raw = " Fish & Chips / Café #1 ";
    let result = client.search(raw).await.unwrap();

    let SearchResult::Name(payload) = &result else {
        panic!("expected a name result");
    };
    assert_eq!(payload.search_term.as_deref(), Some(raw));
    assert_eq!(
        DisplayState::from_result(&result, raw),
        DisplayState::NameAvailable(raw.to_owned())
    );
}

#[tokio::test]
async fn test_connection_refused_is_unreachable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpLookupClient::new(format!("http://{addr}"), DEFAULT_TIMEOUT).unwrap();
    let error = client.search("Zyxwv Trading").await.unwrap_err();

    assert!(matches!(error, LookupError::Unreachable(_)), "{error:?}");
    assert_eq!(
        DisplayState::from_error(&error),
        DisplayState::TransportError(
            "Network error. Please check if the lookup service is reachable.".to_owned()
        )
    );
}

#[tokio::test]
async fn test_timeout_is_unreachable() {
    let addr = spawn_upstream().await;
    let client =
        HttpLookupClient::new(format!("http://{addr}"), Duration::from_millis(200)).unwrap();

    let error = client.search("55555555555").await.unwrap_err();
    assert!(matches!(error, LookupError::Unreachable(_)), "{error:?}");
}
