//! Development proxy for the lookup services.
//!
//! Forwards every request under `/microsvc/` to a fixed upstream origin,
//! letting the upstream host replace the incoming Host header. No retries, no
//! caching; each forwarded request and each transport error is logged.
#![cfg_attr(
    test,
    allow(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::missing_panics_doc,
        reason = "Allow for tests"
    )
)]

use std::io;
use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::header::{
    CONNECTION, CONTENT_LENGTH, HOST, PROXY_AUTHENTICATE, PROXY_AUTHORIZATION, TE, TRAILER,
    TRANSFER_ENCODING, UPGRADE,
};
use axum::http::{HeaderMap, HeaderName, StatusCode};
use axum::response::{IntoResponse as _, Response};
use axum::routing::any;
use reqwest::Client;
use reqwest::redirect::Policy;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{error, info};

/// Path prefix that is forwarded upstream.
pub const PROXY_PREFIX: &str = "/microsvc";
/// Upstream origin used when none is configured.
pub const DEFAULT_UPSTREAM: &str = "https://aim.apiro.ai";
/// Listen address used when none is configured.
pub const DEFAULT_LISTEN: &str = "127.0.0.1:3000";

/// Largest request body the proxy will buffer.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Headers that describe a single connection and must not be forwarded.
static HOP_BY_HOP: [HeaderName; 8] = [
    CONNECTION,
    PROXY_AUTHENTICATE,
    PROXY_AUTHORIZATION,
    TE,
    TRAILER,
    TRANSFER_ENCODING,
    UPGRADE,
    HeaderName::from_static("keep-alive"),
];

/// Errors that stop the proxy from starting or serving.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// Binding or serving failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The outbound HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// Shared state of the forwarding handler.
struct ProxyState {
    /// Outbound client; never follows redirects
    client: Client,
    /// Upstream origin without a trailing slash
    upstream: String,
}

/// Builds the proxy router for `upstream`.
///
/// # Errors
/// Returns an error when the outbound client cannot be constructed.
pub fn router(upstream: &str) -> Result<Router, ProxyError> {
    let client = Client::builder().redirect(Policy::none()).build()?;
    let state = Arc::new(ProxyState {
        client,
        upstream: upstream.trim_end_matches('/').to_owned(),
    });

    Ok(Router::new()
        .route(&format!("{PROXY_PREFIX}/*rest"), any(forward))
        .with_state(state))
}

/// Serves the proxy on an already-bound listener until the server stops.
///
/// # Errors
/// Returns an error if the client cannot be built or serving fails.
pub async fn serve(listener: TcpListener, upstream: &str) -> Result<(), ProxyError> {
    let app = router(upstream)?;
    let local = listener.local_addr()?;
    info!("Proxy listening on {local}, forwarding {PROXY_PREFIX} to {upstream}");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn forward(State(state): State<Arc<ProxyState>>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let path_and_query = parts
        .uri
        .path_and_query()
        .map_or_else(|| parts.uri.path().to_owned(), ToString::to_string);
    info!("Proxying request: {} {}", parts.method, path_and_query);

    let body = match to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(err) => {
            error!("Proxy error: failed to read request body: {err}");
            return (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large").into_response();
        }
    };

    let mut headers = parts.headers;
    strip_hop_by_hop(&mut headers);
    headers.remove(HOST);
    headers.remove(CONTENT_LENGTH);

    let target = format!("{}{path_and_query}", state.upstream);
    let upstream_response = state
        .client
        .request(parts.method, &target)
        .headers(headers)
        .body(body)
        .send()
        .await;

    match upstream_response {
        Ok(response) => relay(response).await,
        Err(err) => {
            error!("Proxy error: {err}");
            (StatusCode::BAD_GATEWAY, format!("Proxy error: {err}")).into_response()
        }
    }
}

async fn relay(response: reqwest::Response) -> Response {
    let status = response.status();
    let mut headers = response.headers().clone();
    strip_hop_by_hop(&mut headers);
    headers.remove(CONTENT_LENGTH);

    match response.bytes().await {
        Ok(body) => {
            let mut relayed = Response::new(Body::from(body));
            *relayed.status_mut() = status;
            *relayed.headers_mut() = headers;
            relayed
        }
        Err(err) => {
            error!("Proxy error: failed to read upstream body: {err}");
            (StatusCode::BAD_GATEWAY, format!("Proxy error: {err}")).into_response()
        }
    }
}

fn strip_hop_by_hop(headers: &mut HeaderMap) {
    for name in &HOP_BY_HOP {
        headers.remove(name);
    }
}
