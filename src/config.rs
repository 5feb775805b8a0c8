//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable is set but does not parse.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Base URL of the business backend; `None` disables `/api` forwarding.
    pub api_upstream_url: Option<String>,
    pub timeouts: UpstreamTimeouts,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `API_UPSTREAM_URL`: backend base URL, trailing `/` trimmed
    /// - `UPSTREAM_TIMEOUT_SECS`: default 30
    /// - `UPSTREAM_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but not a valid number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but not a valid number.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let api_upstream_url = lookup("API_UPSTREAM_URL")
            .map(|url| url.trim().trim_end_matches('/').to_owned())
            .filter(|url| !url.is_empty());
        let timeouts = UpstreamTimeouts {
            request_secs: parse_or("UPSTREAM_TIMEOUT_SECS", lookup("UPSTREAM_TIMEOUT_SECS"), DEFAULT_UPSTREAM_TIMEOUT_SECS)?,
            connect_secs: parse_or(
                "UPSTREAM_CONNECT_TIMEOUT_SECS",
                lookup("UPSTREAM_CONNECT_TIMEOUT_SECS"),
                DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS,
            )?,
        };
        Ok(Self { port, api_upstream_url, timeouts })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}
