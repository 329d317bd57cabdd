//! Client configuration
//!
//! The web build talks to its own origin, so only native builds read a base
//! URL. Values come from the environment with defaults that match the
//! backend's defaults.

use std::time::Duration;

/// Default backend URL for native builds
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Default request timeout in milliseconds (30 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix joined with route paths; empty means same-origin
    pub api_base_url: String,
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Same-origin configuration used by the browser build
    pub fn same_origin() -> Self {
        Self {
            api_base_url: String::new(),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
        }
    }

    /// Read `MOVIEDESK_API_URL` and `MOVIEDESK_REQUEST_TIMEOUT_MS`
    pub fn from_env() -> Self {
        let api_base_url = std::env::var("MOVIEDESK_API_URL")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_ms = std::env::var("MOVIEDESK_REQUEST_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS);

        Self::new(api_base_url, Duration::from_millis(timeout_ms))
    }

    pub fn new(api_base_url: impl Into<String>, request_timeout: Duration) -> Self {
        Self {
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
            request_timeout,
        }
    }

    /// Absolute (or same-origin) URL for a route path
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_API_URL,
            Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
        )
    }
}
