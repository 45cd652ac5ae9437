// Error taxonomy for the analysis library.
//
// Callers need to tell "no data" apart from "bad record" apart from an
// internal failure, so each variant carries a stable string code that the
// CLI puts in its JSON error envelope.

use thiserror::Error;

/// Everything that can go wrong while turning a batch of reviews into a report.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalysisError {
    /// The batch contained zero reviews. There is no mean to compute.
    #[error("no reviews to analyze")]
    EmptyInput,

    /// A record in the batch is missing a field or has the wrong type.
    #[error("malformed review at index {index}: {reason}")]
    MalformedReview { index: usize, reason: String },

    /// Every review failed polarity scoring, so nothing was left to aggregate.
    #[error("none of the reviews could be scored ({skipped} skipped)")]
    NoScorableReviews { skipped: usize },

    #[error("internal error: {0}")]
    Internal(String),
}

impl AnalysisError {
    /// Stable machine-readable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            AnalysisError::EmptyInput => "EMPTY_INPUT",
            AnalysisError::MalformedReview { .. } => "MALFORMED_REVIEW",
            AnalysisError::NoScorableReviews { .. } => "NO_SCORABLE_REVIEWS",
            AnalysisError::Internal(_) => "INTERNAL",
        }
    }

    pub(crate) fn malformed(index: usize, reason: impl Into<String>) -> Self {
        AnalysisError::MalformedReview {
            index,
            reason: reason.into(),
        }
    }
}
