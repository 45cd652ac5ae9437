// Population-level statistics over per-review compound scores.
//
// Neutral means a score of exactly 0.0. The lexicon scorer returns exactly
// zero when a review has no sentiment-bearing words, and the published
// breakdowns have always counted only those as neutral, so there is no
// epsilon band here.

use crate::error::AnalysisError;
use crate::models::SentimentBreakdown;

/// The polarity class of a single compound score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    /// Classify a score. Every non-NaN score lands in exactly one class.
    pub fn classify(score: f64) -> Self {
        if score > 0.0 {
            Polarity::Positive
        } else if score < 0.0 {
            Polarity::Negative
        } else {
            Polarity::Neutral
        }
    }
}

/// Mean compound score remapped from [-1, 1] to [0, 1].
pub fn overall_sentiment(scores: &[f64]) -> Result<f64, AnalysisError> {
    if scores.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    Ok(((mean + 1.0) / 2.0).clamp(0.0, 1.0))
}

/// Fraction of scores in each polarity class.
pub fn breakdown(scores: &[f64]) -> Result<SentimentBreakdown, AnalysisError> {
    if scores.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let (mut positive, mut negative, mut neutral) = (0usize, 0usize, 0usize);
    for &score in scores {
        match Polarity::classify(score) {
            Polarity::Positive => positive += 1,
            Polarity::Negative => negative += 1,
            Polarity::Neutral => neutral += 1,
        }
    }

    let total = scores.len() as f64;
    Ok(SentimentBreakdown {
        positive: positive as f64 / total,
        negative: negative as f64 / total,
        neutral: neutral as f64 / total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_exact_zero_only() {
        assert_eq!(Polarity::classify(0.0), Polarity::Neutral);
        assert_eq!(Polarity::classify(-0.0), Polarity::Neutral);
        assert_eq!(Polarity::classify(1e-12), Polarity::Positive);
        assert_eq!(Polarity::classify(-1e-12), Polarity::Negative);
    }

    #[test]
    fn test_overall_remaps_mean() {
        assert!((overall_sentiment(&[1.0]).unwrap() - 1.0).abs() < 1e-12);
        assert!((overall_sentiment(&[-1.0]).unwrap() - 0.0).abs() < 1e-12);
        assert!((overall_sentiment(&[0.5, -0.5]).unwrap() - 0.5).abs() < 1e-12);
        assert!((overall_sentiment(&[0.6, 0.2]).unwrap() - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_empty_is_an_error_not_a_default() {
        assert_eq!(overall_sentiment(&[]), Err(AnalysisError::EmptyInput));
        assert_eq!(breakdown(&[]), Err(AnalysisError::EmptyInput));
    }

    #[test]
    fn test_breakdown_fractions() {
        let b = breakdown(&[0.7, -0.2, 0.0, 0.1]).unwrap();
        assert_eq!(b.positive, 0.5);
        assert_eq!(b.negative, 0.25);
        assert_eq!(b.neutral, 0.25);
    }

    #[test]
    fn test_breakdown_sums_to_one() {
        let b = breakdown(&[0.3, -0.1, 0.0]).unwrap();
        assert!((b.positive + b.negative + b.neutral - 1.0).abs() < 1e-9);
    }
}
