// Review sentiment: aggregate sentiment reports for batches of reviews.
//
// This is the library root. Each module corresponds to a stage of the
// aggregation pipeline; the binary in main.rs is a thin CLI over it.

pub mod config;
pub mod error;
pub mod input;
pub mod keywords;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod sentiment;

pub use error::AnalysisError;
pub use models::{KeywordCount, LocationSentiment, Review, SentimentBreakdown, SentimentReport};
pub use pipeline::aggregate::{AggregatorConfig, SentimentAggregator};
