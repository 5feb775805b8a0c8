//! `/api/*` forwarding to the business backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle calls same-origin `/api/...` paths. This handler
//! replays each call against `API_UPSTREAM_URL` with the same method, path,
//! query, body and end-to-end headers (including `Authorization`), then relays
//! the upstream status, headers and body unchanged.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use http_body_util::LengthLimitError;

use crate::state::AppState;

/// Largest request body forwarded upstream.
pub const MAX_FORWARD_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Connection-scoped headers that must not cross the proxy. `content-length`
/// is recomputed for the forwarded body.
const HOP_BY_HOP_HEADERS: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
    "content-length",
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("api upstream not configured")]
    NotConfigured,

    #[error("request body exceeds {MAX_FORWARD_BODY_BYTES} bytes")]
    BodyTooLarge,

    #[error("request body unreadable: {0}")]
    RequestBody(axum::BoxError),

    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl ProxyError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::BodyTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::RequestBody(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Only a length-limit failure is a 413; anything else (client abort,
    /// broken transfer encoding) is a bad request.
    fn from_body_error(err: axum::Error) -> Self {
        let inner = err.into_inner();
        let mut source: Option<&(dyn std::error::Error + 'static)> = Some(inner.as_ref());
        while let Some(e) = source {
            if e.is::<LengthLimitError>() {
                return Self::BodyTooLarge;
            }
            source = e.source();
        }
        Self::RequestBody(inner)
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(error = %self, status = status.as_u16(), "api forwarding failed");
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// Join the upstream base URL with the incoming path and query.
pub fn upstream_url(base: &str, path_and_query: &str) -> String {
    format!("{}{path_and_query}", base.trim_end_matches('/'))
}

/// Copy `headers` without hop-by-hop entries.
pub fn end_to_end_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = headers.clone();
    for name in HOP_BY_HOP_HEADERS {
        out.remove(*name);
    }
    out
}

/// `ANY /api/{*path}`: replay the request against the backend.
pub async fn forward(State(state): State<AppState>, req: Request) -> Result<Response, ProxyError> {
    let Some(base) = state.upstream.as_deref() else {
        return Err(ProxyError::NotConfigured);
    };

    let (parts, body) = req.into_parts();
    let path_and_query = parts.uri.path_and_query().map_or("/", |pq| pq.as_str());
    let url = upstream_url(base, path_and_query);
    let body = to_bytes(body, MAX_FORWARD_BODY_BYTES)
        .await
        .map_err(ProxyError::from_body_error)?;

    let upstream = state
        .http
        .request(parts.method.clone(), &url)
        .headers(end_to_end_headers(&parts.headers))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let headers = end_to_end_headers(upstream.headers());
    let bytes = upstream.bytes().await?;
    tracing::debug!(method = %parts.method, %url, status = status.as_u16(), "forwarded api request");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}
