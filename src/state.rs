//! Shared host state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the pooled HTTP client used for `/api` forwarding and the upstream
//! base URL. Cloning is cheap: `reqwest::Client` is reference-counted.

use std::time::Duration;

use crate::config::HostConfig;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub upstream: Option<String>,
}

impl AppState {
    /// Build state from host config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: &HostConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { http, upstream: config.api_upstream_url.clone() })
    }
}
