//! # dealerhub-client — Upstream Service Clients
//!
//! Typed HTTP clients for the two microservices DealerHub proxies:
//!
//! - [`DealerClient`] — the dealer-service, system of record for
//!   dealerships and reviews (`/fetchDealers`, `/fetchDealers/{state}`,
//!   `/fetchDealer/{id}`, `/fetchReviews/dealer/{id}`, `/insert_review`).
//! - [`SentimentClient`] — the sentiment-service, which classifies a piece
//!   of review text via `GET analyze/{text}`.
//!
//! ## Architecture
//!
//! Each client wraps a `reqwest::Client` with the service base URL and a
//! per-request timeout. Both are `Send + Sync` and designed to be shared
//! via `Arc` across async tasks.
//!
//! ## Error Handling
//!
//! Every call returns `Result<T, ClientError>`. The variants keep
//! "service unreachable" ([`ClientError::Http`]) distinct from "service
//! answered with an error" ([`ClientError::Api`]) and from "service
//! answered garbage" ([`ClientError::Deserialization`]) — callers that
//! want to mask failures as empty results must do so explicitly.
//!
//! ## Encoding
//!
//! Query parameters go through reqwest's form encoder and untrusted path
//! segments (state names, review text) are percent-encoded via
//! `url::Url::path_segments_mut`. No hand-assembled query strings.
//!
//! ## Timeout & Retry
//!
//! GET requests are retried with exponential backoff on transport errors;
//! the retry budget and base delay come from [`ClientConfig`]. POSTs are
//! sent exactly once, `/insert_review` is not idempotent upstream.

pub mod config;
pub mod dealer;
pub mod error;
pub mod sentiment;

mod retry;

pub use config::ClientConfig;
pub use dealer::DealerClient;
pub use error::ClientError;
pub use sentiment::SentimentClient;
