// Data types shared across the pipeline.
//
// Field names on the serialized report are fixed: downstream dashboards read
// `overallSentiment`, `sentimentBreakdown`, `topKeywords` and
// `geographicalData` verbatim.

use serde::{Deserialize, Serialize};

/// One observed review: free text plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub text: String,
    pub location: String,
}

impl Review {
    pub fn new(text: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            location: location.into(),
        }
    }
}

/// A normalized token and how often it appeared across the whole batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub word: String,
    pub count: u32,
}

/// Mean raw compound score (in [-1, 1]) for one exact location string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSentiment {
    pub location: String,
    pub sentiment: f64,
}

/// Fractions of reviews in each polarity class. Sums to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

/// The aggregate report for one batch of reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentReport {
    /// Mean compound score remapped from [-1, 1] to [0, 1]
    pub overall_sentiment: f64,
    pub sentiment_breakdown: SentimentBreakdown,
    /// Most frequent keywords, highest count first
    pub top_keywords: Vec<KeywordCount>,
    /// One entry per distinct location, in first-seen order
    pub geographical_data: Vec<LocationSentiment>,
    /// Reviews left out because their polarity could not be computed
    #[serde(default, skip_serializing_if = "is_zero")]
    pub skipped_reviews: usize,
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}
