//! Upstream service configuration.
//!
//! Base URLs come from the same environment variables the original
//! deployment used, with the same defaults:
//!
//! - `backend_url` — dealer-service, default `http://localhost:3030`
//! - `sentiment_analyzer_url` — sentiment-service, default
//!   `http://localhost:5050/`
//!
//! Trailing slashes are trimmed at client construction, so both spellings
//! of the sentiment default produce identical request URLs.

use std::time::Duration;

/// Default dealer-service base URL.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3030";

/// Default sentiment-service base URL.
pub const DEFAULT_SENTIMENT_URL: &str = "http://localhost:5050/";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default number of retries after a failed first attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default first backoff delay; doubles on each further retry.
pub const DEFAULT_RETRY_BASE_DELAY: Duration = Duration::from_millis(200);

/// Configuration for the upstream clients.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the dealer-service.
    pub backend_url: String,
    /// Base URL of the sentiment-service.
    pub sentiment_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Transport-error retries per idempotent request, after the first
    /// attempt. Zero disables retrying.
    pub max_retries: u32,
    /// First backoff delay; doubles on each further retry.
    pub retry_base_delay: Duration,
}

impl ClientConfig {
    /// Build a configuration with explicit base URLs and default timeout
    /// and retry settings.
    pub fn new(backend_url: impl Into<String>, sentiment_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
            sentiment_url: sentiment_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_base_delay: DEFAULT_RETRY_BASE_DELAY,
        }
    }

    /// Resolve the configuration from the environment, falling back to the
    /// fixed defaults for anything unset.
    pub fn from_env() -> Self {
        let backend_url =
            std::env::var("backend_url").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        let sentiment_url = std::env::var("sentiment_analyzer_url")
            .unwrap_or_else(|_| DEFAULT_SENTIMENT_URL.to_string());
        let timeout_secs = std::env::var("DEALERHUB_UPSTREAM_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let max_retries = std::env::var("DEALERHUB_UPSTREAM_MAX_RETRIES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_RETRIES);
        Self {
            backend_url,
            sentiment_url,
            timeout: Duration::from_secs(timeout_secs),
            max_retries,
            retry_base_delay: DEFAULT_RETRY_BASE_DELAY,
        }
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the retry budget and its first backoff delay.
    pub fn with_retry(mut self, max_retries: u32, base_delay: Duration) -> Self {
        self.max_retries = max_retries;
        self.retry_base_delay = base_delay;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL, DEFAULT_SENTIMENT_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_deployment() {
        let config = ClientConfig::default();
        assert_eq!(config.backend_url, "http://localhost:3030");
        assert_eq!(config.sentiment_url, "http://localhost:5050/");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.retry_base_delay, Duration::from_millis(200));
    }

    #[test]
    fn with_timeout_overrides() {
        let config = ClientConfig::default().with_timeout(Duration::from_millis(250));
        assert_eq!(config.timeout, Duration::from_millis(250));
    }

    #[test]
    fn with_retry_overrides() {
        let config = ClientConfig::default().with_retry(0, Duration::from_millis(5));
        assert_eq!(config.max_retries, 0);
        assert_eq!(config.retry_base_delay, Duration::from_millis(5));
    }
}
