// Unit tests for polarity scoring and the statistics built on it.
//
// Covers the lexicon scorer's rule behavior through the PolarityScorer trait,
// plus the overall/breakdown/location helpers with hand-computed values.

use review_sentiment::error::AnalysisError;
use review_sentiment::models::LocationSentiment;
use review_sentiment::scoring::geography::LocationAccumulator;
use review_sentiment::scoring::summary::{breakdown, overall_sentiment, Polarity};
use review_sentiment::sentiment::lexicon::LexiconScorer;
use review_sentiment::sentiment::traits::PolarityScorer;

fn score(text: &str) -> f64 {
    let scorer: &dyn PolarityScorer = &LexiconScorer::default();
    scorer.score(text).unwrap()
}

fn location_means(pairs: &[(&str, f64)]) -> Vec<LocationSentiment> {
    let mut acc = LocationAccumulator::new();
    for (location, score) in pairs {
        acc.add(location, *score);
    }
    acc.finish()
}

// ============================================================
// LexiconScorer via the trait
// ============================================================

#[test]
fn scenario_reviews_classify_as_expected() {
    assert_eq!(
        Polarity::classify(score("Excellent product, highly recommend!")),
        Polarity::Positive
    );
    assert_eq!(
        Polarity::classify(score("Terrible, broke in a day.")),
        Polarity::Negative
    );
    assert_eq!(Polarity::classify(score("It's okay.")), Polarity::Neutral);
}

#[test]
fn clearer_positive_scores_higher() {
    assert!(score("good") < score("really good"));
    assert!(score("really good") < score("really good!!"));
}

#[test]
fn negated_phrase_is_negative() {
    assert!(score("This charger is not reliable") < 0.0);
    assert!(score("I don't love it") < 0.0);
}

#[test]
fn negation_reaches_three_words_back() {
    assert!(score("not a very good case") < 0.0);
}

#[test]
fn single_quoted_words_still_score() {
    assert_eq!(
        Polarity::classify(score("The hotel was 'great'")),
        Polarity::Positive
    );
    assert_eq!(score("'terrible'"), score("terrible"));
}

#[test]
fn empty_text_is_neutral() {
    assert_eq!(score(""), 0.0);
}

#[test]
fn scorer_name() {
    assert_eq!(LexiconScorer::default().name(), "lexicon");
}

#[test]
fn scores_stay_in_range_for_extreme_text() {
    let positive = "BEST BEST BEST love love love perfect amazing!!!!!!!!";
    let negative = "worst worst worst hate hate awful garbage scam!!!!!!";
    for text in [positive, negative] {
        let s = score(text);
        assert!((-1.0..=1.0).contains(&s), "{text} scored {s}");
    }
}

// ============================================================
// summary: overall and breakdown
// ============================================================

#[test]
fn overall_of_symmetric_scores_is_half() {
    let overall = overall_sentiment(&[0.8, -0.8, 0.0]).unwrap();
    assert!((overall - 0.5).abs() < 1e-12);
}

#[test]
fn overall_empty_errors() {
    assert_eq!(overall_sentiment(&[]), Err(AnalysisError::EmptyInput));
}

#[test]
fn breakdown_partitions_every_score() {
    let scores = [0.9, 0.1, -0.3, 0.0, 0.0, -0.0];
    let b = breakdown(&scores).unwrap();
    assert!((b.positive - 2.0 / 6.0).abs() < 1e-12);
    assert!((b.negative - 1.0 / 6.0).abs() < 1e-12);
    assert!((b.neutral - 3.0 / 6.0).abs() < 1e-12);
    assert!((b.positive + b.negative + b.neutral - 1.0).abs() < 1e-9);
}

#[test]
fn tiny_nonzero_is_not_neutral() {
    let b = breakdown(&[1e-9]).unwrap();
    assert_eq!(b.positive, 1.0);
    assert_eq!(b.neutral, 0.0);
}

// ============================================================
// geography: per-location means
// ============================================================

#[test]
fn location_means_average_raw_scores() {
    let geo = location_means(&[("LA", -0.5), ("LA", 0.1), ("SF", 0.4)]);
    assert_eq!(geo.len(), 2);
    assert_eq!(geo[0].location, "LA");
    assert!((geo[0].sentiment - (-0.2)).abs() < 1e-12);
    assert_eq!(geo[1].location, "SF");
    assert!((geo[1].sentiment - 0.4).abs() < 1e-12);
}

#[test]
fn location_case_and_whitespace_are_distinct() {
    let geo = location_means(&[("Paris", 0.1), ("paris", 0.1), ("Paris ", 0.1)]);
    assert_eq!(geo.len(), 3);
}
