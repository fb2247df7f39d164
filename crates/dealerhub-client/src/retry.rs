//! Transport-level retry for upstream GET requests.
//!
//! Only transient transport failures (connection refused, timeouts) are
//! retried. Any HTTP response is final, including 5xx: the caller owns the
//! status-code mapping, and review submission never goes through here at
//! all because `/insert_review` is not idempotent.

use std::future::Future;
use std::time::Duration;

/// Exponential-backoff policy applied to idempotent upstream calls.
///
/// Built from [`ClientConfig`](crate::config::ClientConfig): `max_retries`
/// extra attempts after the first, starting at `base_delay` and doubling.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RetryPolicy {
    max_retries: u32,
    base_delay: Duration,
}

impl RetryPolicy {
    pub(crate) fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }

    /// Drive `f` until it yields a response or the retry budget is spent.
    pub(crate) async fn send<F, Fut>(&self, f: F) -> Result<reqwest::Response, reqwest::Error>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<reqwest::Response, reqwest::Error>>,
    {
        let mut remaining = self.max_retries;
        let mut delay = self.base_delay;
        loop {
            let err = match f().await {
                Ok(resp) => return Ok(resp),
                Err(err) => err,
            };
            if remaining == 0 {
                return Err(err);
            }
            tracing::warn!(remaining, backoff_ms = delay.as_millis() as u64,
                "upstream request failed, backing off: {err}");
            tokio::time::sleep(delay).await;
            delay *= 2;
            remaining -= 1;
        }
    }
}
