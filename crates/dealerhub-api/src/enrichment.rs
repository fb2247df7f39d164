//! Concurrent sentiment enrichment of review batches.
//!
//! Each review's text is classified by the sentiment-service. Lookups run
//! concurrently under a semaphore bound and a per-lookup timeout, and a
//! failed or timed-out lookup only costs that one review its label. Output
//! order always matches input order, and the batch never shrinks: K reviews
//! in, K enriched reviews out.

use std::sync::Arc;
use std::time::Duration;

use dealerhub_core::{EnrichedReview, Review};
use dealerhub_client::SentimentClient;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Attach sentiment labels to a batch of reviews.
///
/// `concurrency` bounds in-flight sentiment calls; `timeout` caps each
/// individual lookup.
pub async fn enrich_reviews(
    sentiment: Arc<SentimentClient>,
    reviews: Vec<Review>,
    concurrency: usize,
    timeout: Duration,
) -> Vec<EnrichedReview> {
    let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));
    let mut tasks = JoinSet::new();

    let mut slots: Vec<Option<EnrichedReview>> = Vec::with_capacity(reviews.len());
    for (index, review) in reviews.into_iter().enumerate() {
        slots.push(None);
        let sentiment = Arc::clone(&sentiment);
        let semaphore = Arc::clone(&semaphore);
        tasks.spawn(async move {
            // Closing is impossible here, the semaphore outlives the tasks.
            let _permit = semaphore.acquire_owned().await;
            let label = match tokio::time::timeout(timeout, sentiment.analyze(&review.review)).await
            {
                Ok(Ok(resp)) => Some(resp.sentiment),
                Ok(Err(err)) => {
                    tracing::warn!(index, error = %err, "sentiment lookup failed");
                    None
                }
                Err(_) => {
                    tracing::warn!(index, timeout_ms = timeout.as_millis() as u64,
                        "sentiment lookup timed out");
                    None
                }
            };
            (index, EnrichedReview::new(review, label))
        });
    }

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, enriched)) => slots[index] = Some(enriched),
            Err(err) => tracing::error!(error = %err, "sentiment lookup task panicked"),
        }
    }

    // A panicked task leaves its slot empty; nothing sensible can fill it,
    // so it is dropped. All non-panicking paths produce a value.
    slots.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dealerhub_client::ClientConfig;
    use wiremock::matchers::{method, path_regex};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn review(text: &str) -> Review {
        serde_json::from_value(serde_json::json!({ "review": text })).unwrap()
    }

    fn client_for(server: &MockServer) -> Arc<SentimentClient> {
        let config = ClientConfig::new("http://unused.invalid", server.uri());
        Arc::new(SentimentClient::new(&config).unwrap())
    }

    #[tokio::test]
    async fn batch_keeps_order_and_size() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_regex("^/analyze/great(%20| )service$"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "sentiment": "positive"
                })),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path_regex("^/analyze/slow$"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "sentiment": "negative"
                })),
            )
            .mount(&server)
            .await;

        let enriched = enrich_reviews(
            client_for(&server),
            vec![review("great service"), review("slow")],
            8,
            Duration::from_secs(2),
        )
        .await;

        assert_eq!(enriched.len(), 2);
        assert_eq!(enriched[0].review.review, "great service");
        assert_eq!(
            enriched[0].sentiment,
            Some(dealerhub_core::SentimentLabel::Positive)
        );
        assert_eq!(enriched[1].review.review, "slow");
        assert_eq!(
            enriched[1].sentiment,
            Some(dealerhub_core::SentimentLabel::Negative)
        );
    }

    #[tokio::test]
    async fn failed_lookup_only_drops_that_label() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_regex("^/analyze/fine$"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "sentiment": "neutral"
                })),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path_regex("^/analyze/broken$"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let enriched = enrich_reviews(
            client_for(&server),
            vec![review("fine"), review("broken")],
            8,
            Duration::from_secs(2),
        )
        .await;

        assert_eq!(enriched.len(), 2);
        assert!(enriched[0].sentiment.is_some());
        assert!(enriched[1].sentiment.is_none());
    }

    #[tokio::test]
    async fn slow_lookup_times_out_but_review_survives() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_regex("^/analyze/sluggish$"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "sentiment": "positive" }))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let enriched = enrich_reviews(
            client_for(&server),
            vec![review("sluggish")],
            8,
            Duration::from_millis(100),
        )
        .await;

        assert_eq!(enriched.len(), 1);
        assert_eq!(enriched[0].review.review, "sluggish");
        assert!(enriched[0].sentiment.is_none());
    }

    #[tokio::test]
    async fn empty_batch_is_a_noop() {
        let server = MockServer::start().await;
        let enriched =
            enrich_reviews(client_for(&server), vec![], 8, Duration::from_secs(1)).await;
        assert!(enriched.is_empty());
    }

    #[tokio::test]
    async fn concurrency_of_zero_still_makes_progress() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_regex("^/analyze/ok$"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "sentiment": "neutral"
                })),
            )
            .mount(&server)
            .await;

        let enriched = enrich_reviews(
            client_for(&server),
            vec![review("ok")],
            0,
            Duration::from_secs(2),
        )
        .await;
        assert_eq!(enriched.len(), 1);
    }
}
