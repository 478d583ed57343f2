//! Reqwest-backed lookup client.
//!
//! Owns transport details only: URL construction, timeout, status mapping and
//! JSON decoding. What the decoded body means is decided in `abn-core`.

use core::result::Result as CoreResult;
use std::time::Duration;

use abn_core::{IdentifierPayload, LookupError, LookupService, NamePayload, Result, SearchResult};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Error as ReqwestError, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

/// Origin the development proxy forwards `/microsvc` to.
pub const DEFAULT_BASE_URL: &str = "https://aim.apiro.ai";
/// Request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Path prefix of the ABN lookup service; the ABN is appended.
const LOOKUP_PATH: &str = "/microsvc/BUSINESS/ABN_LOOKUP_SERVICE/lookup/";
/// Path of the business name search service.
const SEARCH_PATH: &str = "/microsvc/BUSINESS/ABN_NAME_SEARCH/search";

/// Lookup client that performs HTTP GET requests against one base URL.
#[derive(Debug, Clone)]
pub struct HttpLookupClient {
    /// HTTP client for API requests.
    client: Client,
    /// Origin (and optional path prefix) without a trailing slash.
    base_url: String,
}

impl HttpLookupClient {
    /// Creates a client for `base_url` with an explicit request timeout.
    ///
    /// # Errors
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> CoreResult<Self, ReqwestError> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Ok(Self { client, base_url })
    }

    /// URL of the ABN lookup for an already-normalized identifier.
    pub fn identifier_url(&self, abn: &str) -> String {
        format!("{}{LOOKUP_PATH}{abn}", self.base_url)
    }

    /// URL of the name search. The name is percent-encoded as given.
    pub fn name_url(&self, name: &str) -> String {
        format!(
            "{}{SEARCH_PATH}?name={}",
            self.base_url,
            urlencoding::encode(name)
        )
    }

    async fn fetch<T: DeserializeOwned + Default>(&self, url: &str) -> Result<T> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|error| map_transport_error(url, &error))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|error| map_transport_error(url, &error))?;

        if !status.is_success() {
            warn!("GET {url} failed with status {status}");
            return Err(map_status_error(status, &body));
        }

        decode_payload(&body)
            .inspect_err(|error| warn!("GET {url} returned an undecodable body: {error}"))
    }
}

#[async_trait]
impl LookupService for HttpLookupClient {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn lookup_identifier(&self, abn: &str) -> Result<SearchResult> {
        let payload: IdentifierPayload = self.fetch(&self.identifier_url(abn)).await?;
        Ok(SearchResult::Identifier(payload))
    }

    async fn search_name(&self, name: &str) -> Result<SearchResult> {
        let payload: NamePayload = self.fetch(&self.name_url(name)).await?;
        Ok(SearchResult::Name(payload))
    }
}

fn map_transport_error(url: &str, error: &ReqwestError) -> LookupError {
    warn!("GET {url} failed: {error}");
    LookupError::Unreachable(error.to_string())
}

/// Decodes a successful body. Only a JSON object carries payload fields; any
/// other JSON value is read as a body with none of them set.
fn decode_payload<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T> {
    match serde_json::from_slice::<Value>(body) {
        Ok(object @ Value::Object(_)) => {
            serde_json::from_value(object).map_err(|error| LookupError::Decode(error.to_string()))
        }
        Ok(_) => Ok(T::default()),
        Err(error) => Err(LookupError::Decode(error.to_string())),
    }
}

/// Failure bodies that are JSON objects carry a usable message; anything else
/// is treated like no response at all.
fn map_status_error(status: StatusCode, body: &[u8]) -> LookupError {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(fields)) => LookupError::from_failure_body(
            status.as_u16(),
            fields.get("message"),
            fields.get("error"),
        ),
        _ => LookupError::Unreachable(format!("HTTP {status}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> HttpLookupClient {
        HttpLookupClient::new(base, DEFAULT_TIMEOUT).unwrap()
    }

    #[test]
    fn test_identifier_url() {
        assert_eq!(
            client("https://aim.apiro.ai").identifier_url("12345678901"),
            "https://aim.apiro.ai/microsvc/BUSINESS/ABN_LOOKUP_SERVICE/lookup/12345678901"
        );
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        assert_eq!(
            client("http://localhost:3000/").identifier_url("12345678901"),
            "http://localhost:3000/microsvc/BUSINESS/ABN_LOOKUP_SERVICE/lookup/12345678901"
        );
    }

    #[test]
    fn test_name_url_percent_encodes_raw_text() {
        assert_eq!(
            client("http://localhost:3000").name_url("Fish & Chips Pty/Ltd"),
            "http://localhost:3000/microsvc/BUSINESS/ABN_NAME_SEARCH/search?name=Fish%20%26%20Chips%20Pty%2FLtd"
        );
    }

    #[test]
    fn test_status_error_with_message() {
        let error = map_status_error(
            StatusCode::BAD_REQUEST,
            br#"{"error":"BAD_REQUEST","message":"name too short"}"#,
        );
        assert_eq!(error.user_message(), "Error: name too short");
    }

    #[test]
    fn test_status_error_with_only_error_field() {
        let error = map_status_error(StatusCode::NOT_FOUND, br#"{"error":"NOT_FOUND"}"#);
        assert_eq!(error.user_message(), "Error: NOT_FOUND");
    }

    #[test]
    fn test_status_error_with_boolean_error_field() {
        let error = map_status_error(StatusCode::INTERNAL_SERVER_ERROR, br#"{"error":true}"#);
        assert_eq!(error.user_message(), "Error: true");
    }

    #[test]
    fn test_array_body_decodes_as_empty_payload() {
        let payload: NamePayload = decode_payload(br#"[{"name":"ACME PTY LTD"}]"#).unwrap();
        assert_eq!(payload, NamePayload::default());
        assert!(!payload.has_error());
        assert!(!payload.has_matches());
    }

    #[test]
    fn test_scalar_bodies_decode_as_empty_payload() {
        for body in ["null", "true", "42", r#""ok""#] {
            let payload: IdentifierPayload = decode_payload(body.as_bytes()).unwrap();
            assert_eq!(payload, IdentifierPayload::default());
        }
    }

    #[test]
    fn test_non_json_body_is_decode_error() {
        let error = decode_payload::<NamePayload>(b"<html>ok</html>").unwrap_err();
        assert!(matches!(error, LookupError::Decode(_)));
    }

    #[test]
    fn test_status_error_without_structured_body() {
        let html = map_status_error(StatusCode::BAD_GATEWAY, b"<html>Bad Gateway</html>");
        let array = map_status_error(StatusCode::INTERNAL_SERVER_ERROR, b"[1,2]");
        assert!(matches!(html, LookupError::Unreachable(_)));
        assert!(matches!(array, LookupError::Unreachable(_)));
    }
}
