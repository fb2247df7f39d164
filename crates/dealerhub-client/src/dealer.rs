//! HTTP client for the dealer-service.
//!
//! The dealer-service is the system of record for dealerships and reviews.
//! This client covers its full consumed surface: dealer listing (optionally
//! state-scoped), single-dealer lookup, per-dealer review listing, and
//! review submission.

use serde::de::DeserializeOwned;
use url::Url;

use dealerhub_core::{Dealer, Review};

use crate::config::ClientConfig;
use crate::error::{body_excerpt, ClientError};
use crate::retry::RetryPolicy;

/// Typed client for the dealer-service REST API.
#[derive(Debug, Clone)]
pub struct DealerClient {
    http: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

impl DealerClient {
    /// Create a new dealer-service client from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {e}")))?;

        let base_url = config.backend_url.trim_end_matches('/').to_string();
        let retry = RetryPolicy::new(config.max_retries, config.retry_base_delay);
        Ok(Self {
            http,
            base_url,
            retry,
        })
    }

    /// Generic GET against the dealer-service.
    ///
    /// `endpoint` is a trusted, slash-prefixed path; `query` pairs are
    /// serialized through the URL form encoder — never concatenated by hand.
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, endpoint)).map_err(|e| {
            ClientError::InvalidUrl {
                endpoint: endpoint.to_string(),
                reason: e.to_string(),
            }
        })?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        self.get_json(url).await
    }

    /// `GET /fetchDealers` — all dealerships.
    pub async fn fetch_dealers(&self) -> Result<Vec<Dealer>, ClientError> {
        self.get("/fetchDealers", &[]).await
    }

    /// `GET /fetchDealers/{state}` — dealerships in one state.
    ///
    /// The state name is percent-encoded as a single path segment, so
    /// values like `New York` travel correctly.
    pub async fn fetch_dealers_by_state(&self, state: &str) -> Result<Vec<Dealer>, ClientError> {
        let url = self.endpoint_url(&["fetchDealers", state])?;
        self.get_json(url).await
    }

    /// `GET /fetchDealer/{id}` — a single dealership.
    pub async fn fetch_dealer(&self, dealer_id: i64) -> Result<Dealer, ClientError> {
        let url = self.endpoint_url(&["fetchDealer", &dealer_id.to_string()])?;
        self.get_json(url).await
    }

    /// `GET /fetchReviews/dealer/{id}` — all reviews for a dealership.
    pub async fn fetch_reviews(&self, dealer_id: i64) -> Result<Vec<Review>, ClientError> {
        let url = self.endpoint_url(&["fetchReviews", "dealer", &dealer_id.to_string()])?;
        self.get_json(url).await
    }

    /// `POST /insert_review` — submit a review.
    ///
    /// Sent exactly once: the dealer-service assigns review ids on insert,
    /// so a blind retry could duplicate the review. Returns the saved
    /// record as echoed by the service.
    pub async fn post_review(&self, review: &Review) -> Result<serde_json::Value, ClientError> {
        let endpoint = "/insert_review";
        let url = format!("{}{}", self.base_url, endpoint);

        let resp = self
            .http
            .post(&url)
            .json(review)
            .send()
            .await
            .map_err(|source| ClientError::Http {
                endpoint: endpoint.to_string(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                body: body_excerpt(body),
            });
        }

        resp.json()
            .await
            .map_err(|source| ClientError::Deserialization {
                endpoint: endpoint.to_string(),
                source,
            })
    }

    /// Build a URL from untrusted path segments, percent-encoding each one.
    fn endpoint_url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        build_segmented_url(&self.base_url, segments)
    }

    /// Issue a GET with transport retry and map the outcome to [`ClientError`].
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
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

/// Append percent-encoded path segments to a base URL.
pub(crate) fn build_segmented_url(base_url: &str, segments: &[&str]) -> Result<Url, ClientError> {
    let endpoint = format!("/{}", segments.join("/"));
    let mut url = Url::parse(base_url).map_err(|e| ClientError::InvalidUrl {
        endpoint: endpoint.clone(),
        reason: e.to_string(),
    })?;
    url.path_segments_mut()
        .map_err(|_| ClientError::InvalidUrl {
            endpoint: endpoint.clone(),
            reason: "base URL cannot be a base".to_string(),
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
