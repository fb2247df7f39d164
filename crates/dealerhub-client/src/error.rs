//! Upstream client error types.

/// Maximum length of the response-body excerpt carried in [`ClientError::Api`].
const BODY_EXCERPT_LEN: usize = 256;

/// Errors from dealer-service and sentiment-service calls.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP transport error — the service never answered.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },

    /// The service answered with a non-2xx status.
    #[error("{endpoint} returned {status}: {body}")]
    Api {
        endpoint: String,
        status: u16,
        /// Response body excerpt, truncated for diagnostics.
        body: String,
    },

    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },

    /// The configured base URL cannot be combined with the endpoint path.
    #[error("invalid URL for {endpoint}: {reason}")]
    InvalidUrl { endpoint: String, reason: String },

    /// The underlying HTTP client could not be constructed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Whether the failure was transport-level (service unreachable or
    /// timed out) as opposed to an answer the service actually produced.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http { .. })
    }
}

/// Truncate a response body for inclusion in an error message.
pub(crate) fn body_excerpt(body: String) -> String {
    if body.chars().count() <= BODY_EXCERPT_LEN {
        body
    } else {
        body.chars().take(BODY_EXCERPT_LEN).collect()
    }
}
