//! # dealerhub-core — Domain Types
//!
//! Shared types for the DealerHub backend, split along the same line the
//! service itself is split:
//!
//! - [`catalog`] — the locally persisted car catalog (makes, models, and
//!   their validation rules).
//! - [`review`] — wire types for the two upstream microservices: the
//!   dealer-service (dealerships and reviews, the system of record) and
//!   the sentiment-service (free-text sentiment classification).
//!
//! This crate deliberately contains no I/O: the HTTP clients live in
//! `dealerhub-client` and persistence lives in `dealerhub-api`.

pub mod catalog;
pub mod review;

pub use catalog::{CarListing, CarMake, CarModel, CarType, ValidationError};
pub use review::{Dealer, EnrichedReview, Review, SentimentLabel, SentimentResponse};
