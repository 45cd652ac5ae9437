// Sentiment aggregation: the core of the report.
//
// Given a batch of reviews, this module:
// 1. Scores each review's raw text with the polarity scorer
// 2. Drops reviews whose score could not be computed (skip-and-count)
// 3. Averages the remaining scores into the overall sentiment
// 4. Classifies each score into the positive/negative/neutral breakdown
// 5. Averages scores per exact location string
// 6. Tokenizes the remaining reviews into the corpus keyword table
//
// Scoring is the only step that can run in parallel. Everything after it is
// a sequential pass in input order, so the report is the same whether or not
// the batch crossed the parallel threshold.

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::error::AnalysisError;
use crate::keywords::frequency::{KeywordCounter, DEFAULT_TOP_KEYWORDS};
use crate::keywords::stopwords::StopWords;
use crate::models::{Review, SentimentReport};
use crate::scoring::geography::LocationAccumulator;
use crate::scoring::summary;
use crate::sentiment::lexicon::LexiconScorer;
use crate::sentiment::traits::PolarityScorer;

/// Default batch size at which scoring moves onto the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 512;

/// Tunables for a single aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatorConfig {
    /// Maximum length of `topKeywords`
    pub top_keywords: usize,
    /// Batches at least this large are scored in parallel
    pub parallel_threshold: usize,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            top_keywords: DEFAULT_TOP_KEYWORDS,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Turns a batch of reviews into a `SentimentReport`.
///
/// Holds its collaborators explicitly, so one aggregator can be shared by
/// reference across threads and called with independent batches.
pub struct SentimentAggregator {
    scorer: Box<dyn PolarityScorer>,
    stop_words: StopWords,
    config: AggregatorConfig,
}

impl Default for SentimentAggregator {
    fn default() -> Self {
        Self::new(
            Box::new(LexiconScorer::default()),
            StopWords::english(),
            AggregatorConfig::default(),
        )
    }
}

impl SentimentAggregator {
    pub fn new(
        scorer: Box<dyn PolarityScorer>,
        stop_words: StopWords,
        config: AggregatorConfig,
    ) -> Self {
        Self {
            scorer,
            stop_words,
            config,
        }
    }

    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Build the report for `reviews`.
    ///
    /// Fails with `EmptyInput` on an empty batch and with `NoScorableReviews`
    /// when every review failed scoring. Never mutates the input.
    pub fn aggregate(&self, reviews: &[Review]) -> Result<SentimentReport, AnalysisError> {
        if reviews.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let scored = self.score_all(reviews);

        let mut scores = Vec::with_capacity(reviews.len());
        let mut locations = LocationAccumulator::new();
        let mut keywords = KeywordCounter::new();
        let mut skipped = 0usize;

        for (index, (review, result)) in reviews.iter().zip(scored).enumerate() {
            let score = match result {
                Ok(score) => score,
                Err(e) => {
                    warn!(index, error = %e, "Skipping review that could not be scored");
                    skipped += 1;
                    continue;
                }
            };
            scores.push(score);
            locations.add(&review.location, score);
            keywords.add_text(&review.text, &self.stop_words);
        }

        if scores.is_empty() {
            return Err(AnalysisError::NoScorableReviews { skipped });
        }

        let overall_sentiment = summary::overall_sentiment(&scores)?;
        let sentiment_breakdown = summary::breakdown(&scores)?;
        let distinct_words = keywords.distinct();
        let top_keywords = keywords.top(self.config.top_keywords);
        let geographical_data = locations.finish();

        info!(
            reviews = reviews.len(),
            scored = scores.len(),
            skipped,
            scorer = self.scorer.name(),
            overall = format!("{:.3}", overall_sentiment),
            locations = geographical_data.len(),
            distinct_words,
            "Aggregated review sentiment"
        );

        Ok(SentimentReport {
            overall_sentiment,
            sentiment_breakdown,
            top_keywords,
            geographical_data,
            skipped_reviews: skipped,
        })
    }

    /// Score every review, in input order.
    fn score_all(&self, reviews: &[Review]) -> Vec<Result<f64, String>> {
        let parallel = reviews.len() >= self.config.parallel_threshold;
        debug!(reviews = reviews.len(), parallel, "Scoring reviews");

        if parallel {
            reviews
                .par_iter()
                .map(|review| self.score_one(&review.text))
                .collect()
        } else {
            reviews
                .iter()
                .map(|review| self.score_one(&review.text))
                .collect()
        }
    }

    /// Score one text, rejecting values outside [-1, 1] as failures.
    fn score_one(&self, text: &str) -> Result<f64, String> {
        match self.scorer.score(text) {
            Ok(score) if score.is_finite() && (-1.0..=1.0).contains(&score) => Ok(score),
            Ok(score) => Err(format!("scorer returned out-of-range value {score}")),
            Err(e) => Err(format!("{e:#}")),
        }
    }
}
