//! Wire types for the dealer-service and sentiment-service.
//!
//! These entities are owned by the upstream microservices and are never
//! persisted locally — they pass through the API as fetched, with one
//! addition: [`EnrichedReview`] attaches the sentiment label derived per
//! review by the sentiment-service.
//!
//! Field names mirror the upstream JSON exactly. Every field except the
//! review text is defaulted so a minimal upstream payload (or a sparse
//! record) still deserializes instead of poisoning a whole batch.

use serde::{Deserialize, Serialize};

/// A dealership record from the dealer-service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dealer {
    pub id: i64,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "long")]
    pub long_: Option<f64>,
}

/// A review record from the dealer-service.
///
/// `dealership` is the dealer identifier; `review` is the free text the
/// sentiment-service classifies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dealership: Option<i64>,
    pub review: String,
    #[serde(default)]
    pub purchase: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_make: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_year: Option<i64>,
}

/// Sentiment classification of a piece of review text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response body of the sentiment-service `analyze/{text}` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentResponse {
    pub sentiment: SentimentLabel,
}

/// A review with its derived sentiment label attached.
///
/// The label is absent when the sentiment lookup for this review failed or
/// timed out — the review itself is still emitted (per-item isolation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedReview {
    #[serde(flatten)]
    pub review: Review,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentLabel>,
}

impl EnrichedReview {
    /// Attach a sentiment label (or record its absence) to a fetched review.
    pub fn new(review: Review, sentiment: Option<SentimentLabel>) -> Self {
        Self { review, sentiment }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_review_deserializes() {
        let review: Review = serde_json::from_str(r#"{"review":"great service"}"#).unwrap();
        assert_eq!(review.review, "great service");
        assert_eq!(review.id, None);
        assert!(!review.purchase);
    }

    #[test]
    fn full_review_round_trips() {
        let json = serde_json::json!({
            "id": 3,
            "name": "Ada",
            "dealership": 17,
            "review": "slow",
            "purchase": true,
            "purchase_date": "03/15/2025",
            "car_make": "Kia",
            "car_model": "Soul",
            "car_year": 2023
        });
        let review: Review = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(serde_json::to_value(&review).unwrap(), json);
    }

    #[test]
    fn sentiment_label_lowercase_wire_format() {
        let resp: SentimentResponse = serde_json::from_str(r#"{"sentiment":"positive"}"#).unwrap();
        assert_eq!(resp.sentiment, SentimentLabel::Positive);
        assert_eq!(
            serde_json::to_string(&SentimentLabel::Negative).unwrap(),
            "\"negative\""
        );
    }

    #[test]
    fn unknown_sentiment_label_is_an_error() {
        let resp: Result<SentimentResponse, _> = serde_json::from_str(r#"{"sentiment":"meh"}"#);
        assert!(resp.is_err());
    }

    #[test]
    fn enriched_review_flattens_and_omits_missing_label() {
        let review: Review = serde_json::from_str(r#"{"review":"slow"}"#).unwrap();

        let with = EnrichedReview::new(review.clone(), Some(SentimentLabel::Negative));
        let json = serde_json::to_value(&with).unwrap();
        assert_eq!(json["review"], "slow");
        assert_eq!(json["sentiment"], "negative");

        let without = EnrichedReview::new(review, None);
        let json = serde_json::to_value(&without).unwrap();
        assert!(json.get("sentiment").is_none());
    }

    #[test]
    fn dealer_tolerates_sparse_payload() {
        let dealer: Dealer = serde_json::from_str(r#"{"id":17,"state":"Kansas"}"#).unwrap();
        assert_eq!(dealer.id, 17);
        assert_eq!(dealer.state, "Kansas");
        assert!(dealer.full_name.is_empty());
        assert_eq!(dealer.lat, None);
    }

    #[test]
    fn dealer_long_field_uses_original_wire_name() {
        let dealer: Dealer =
            serde_json::from_str(r#"{"id":1,"lat":38.0,"long":-97.5}"#).unwrap();
        assert_eq!(dealer.long_, Some(-97.5));
        let json = serde_json::to_value(&dealer).unwrap();
        assert!(json.get("long").is_some());
        assert!(json.get("long_").is_none());
    }
}
