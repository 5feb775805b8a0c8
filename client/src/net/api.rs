//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, same-origin under
//! `/api` (the host server forwards those to the business backend).
//! Server-side (SSR) and tests: calls return [`ApiError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get typed `Result`s instead of panics so fetch failures degrade UI
//! behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{DashboardStats, SessionPayload};
#[cfg(feature = "hydrate")]
use super::types::LoginRequest;

pub const DASHBOARD_STATS_ENDPOINT: &str = "/api/dashboard/stats";
pub const LOGIN_ENDPOINT: &str = "/api/auth/login";

/// Failure of a REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("request failed: {0}")]
    Status(u16),

    /// The response body did not match the expected schema.
    #[error("invalid response: {0}")]
    Decode(String),

    /// HTTP is only available in the browser build.
    #[error("not available on server")]
    Unavailable,
}

/// Value for the `Authorization` header, or `None` for a missing/blank token.
pub fn authorization_header(token: Option<&str>) -> Option<String> {
    let token = token?.trim();
    if token.is_empty() {
        return None;
    }
    Some(format!("Bearer {token}"))
}

/// Fetch dashboard summary statistics from `GET /api/dashboard/stats`.
///
/// # Errors
///
/// Returns an error if the request fails, the backend responds with a non-OK
/// status, or the body cannot be decoded.
pub async fn fetch_dashboard_stats(access_token: Option<&str>) -> Result<DashboardStats, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut request = gloo_net::http::Request::get(DASHBOARD_STATS_ENDPOINT);
        if let Some(value) = authorization_header(access_token) {
            request = request.header("Authorization", &value);
        }
        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<DashboardStats>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = access_token;
        Err(ApiError::Unavailable)
    }
}

/// Exchange credentials for a session via `POST /api/auth/login`.
///
/// The returned payload is unvalidated; hand it to the session store.
///
/// # Errors
///
/// Returns an error if the request fails, the credentials are rejected, or
/// the body cannot be decoded.
pub async fn login(email: &str, password: &str) -> Result<SessionPayload, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(&body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<SessionPayload>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}
