//! Service configuration, resolved once at startup from the environment.

use std::time::Duration;

use dealerhub_client::ClientConfig;

/// Default bind address.
pub const DEFAULT_BIND: &str = "0.0.0.0:8000";

/// Default database URL (in-memory SQLite).
pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";

/// Default bound on concurrent sentiment lookups per request.
pub const DEFAULT_SENTIMENT_CONCURRENCY: usize = 8;

/// Service configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Socket address to bind, `DEALERHUB_BIND`.
    pub bind: String,
    /// Database URL, `DATABASE_URL`. Defaults to in-memory SQLite.
    pub database_url: String,
    /// Upstream client configuration (`backend_url`,
    /// `sentiment_analyzer_url`, `DEALERHUB_UPSTREAM_TIMEOUT_SECS`).
    pub client: ClientConfig,
    /// Bound on concurrent sentiment lookups within one enrichment batch,
    /// `DEALERHUB_SENTIMENT_CONCURRENCY`.
    pub sentiment_concurrency: usize,
    /// Per-lookup timeout during enrichment. Reuses the upstream client
    /// timeout so one stuck lookup cannot hold a batch open indefinitely.
    pub sentiment_timeout: Duration,
}

impl ApiConfig {
    /// Resolve the full configuration from the environment.
    pub fn from_env() -> Self {
        let client = ClientConfig::from_env();
        let sentiment_timeout = client.timeout;
        Self {
            bind: std::env::var("DEALERHUB_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string()),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            client,
            sentiment_concurrency: std::env::var("DEALERHUB_SENTIMENT_CONCURRENCY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SENTIMENT_CONCURRENCY),
            sentiment_timeout,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        let client = ClientConfig::default();
        let sentiment_timeout = client.timeout;
        Self {
            bind: DEFAULT_BIND.to_string(),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            client,
            sentiment_concurrency: DEFAULT_SENTIMENT_CONCURRENCY,
            sentiment_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_self_contained() {
        let config = ApiConfig::default();
        assert_eq!(config.bind, "0.0.0.0:8000");
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.sentiment_concurrency, 8);
        assert_eq!(config.client.backend_url, "http://localhost:3030");
    }
}
