//! HTTP client for the sentiment-service.
//!
//! One endpoint: `GET analyze/{text}` classifies a piece of free text and
//! returns `{"sentiment": "positive" | "negative" | "neutral"}`. The text
//! travels as a percent-encoded path segment, so arbitrary review prose
//! (spaces, punctuation, slashes) is safe.

use dealerhub_core::SentimentResponse;

use crate::config::ClientConfig;
use crate::dealer::build_segmented_url;
use crate::error::{body_excerpt, ClientError};
use crate::retry::RetryPolicy;

/// Typed client for the sentiment-service.
#[derive(Debug, Clone)]
pub struct SentimentClient {
    http: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

impl SentimentClient {
    /// Create a new sentiment-service client from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {e}")))?;

        let base_url = config.sentiment_url.trim_end_matches('/').to_string();
        let retry = RetryPolicy::new(config.max_retries, config.retry_base_delay);
        Ok(Self {
            http,
            base_url,
            retry,
        })
    }

    /// `GET analyze/{text}` — classify a piece of review text.
    pub async fn analyze(&self, text: &str) -> Result<SentimentResponse, ClientError> {
        let url = build_segmented_url(&self.base_url, &["analyze", text])?;
        let endpoint = url.path().to_string();

        let resp = self
            .retry
            .send(|| self.http.get(url.clone()).send())
            .await
            .map_err(|source| ClientError::Http {
                endpoint: endpoint.clone(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                endpoint,
                status: status.as_u16(),
                body: body_excerpt(body),
            });
        }

        resp.json()
            .await
            .map_err(|source| ClientError::Deserialization { endpoint, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dealerhub_core::SentimentLabel;
    use std::time::Duration;
    use wiremock::matchers::{method, path_regex};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> SentimentClient {
        let config = ClientConfig::new("http://localhost:3030", server.uri())
            .with_timeout(Duration::from_secs(2));
        SentimentClient::new(&config).expect("client should build")
    }

    #[tokio::test]
    async fn analyze_encodes_text_as_path_segment() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_regex("^/analyze/great(%20| )service$"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"sentiment": "positive"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let resp = client_for(&server).analyze("great service").await.expect("label");
        assert_eq!(resp.sentiment, SentimentLabel::Positive);
    }

    #[tokio::test]
    async fn analyze_failure_maps_to_api_variant() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client_for(&server).analyze("slow").await.unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 503, .. }));
    }

    #[tokio::test]
    async fn malformed_label_maps_to_deserialization_variant() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"sentiment": "meh"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).analyze("ok").await.unwrap_err();
        assert!(matches!(err, ClientError::Deserialization { .. }));
    }
}
