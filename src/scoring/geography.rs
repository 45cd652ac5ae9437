// Per-location average sentiment.
//
// Locations are grouped by exact string equality. "NY", "ny" and "New York"
// are three different buckets.

use std::collections::HashMap;

use crate::models::LocationSentiment;

/// Running sum and count per location, in first-seen order.
#[derive(Debug, Default)]
pub struct LocationAccumulator {
    index: HashMap<String, usize>,
    buckets: Vec<(String, f64, u32)>,
}

impl LocationAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, location: &str, score: f64) {
        match self.index.get(location) {
            Some(&i) => {
                let bucket = &mut self.buckets[i];
                bucket.1 += score;
                bucket.2 += 1;
            }
            None => {
                self.index.insert(location.to_string(), self.buckets.len());
                self.buckets.push((location.to_string(), score, 1));
            }
        }
    }

    /// Mean raw compound score per location.
    pub fn finish(self) -> Vec<LocationSentiment> {
        self.buckets
            .into_iter()
            .map(|(location, sum, count)| LocationSentiment {
                location,
                sentiment: sum / f64::from(count),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn means(pairs: &[(&str, f64)]) -> Vec<LocationSentiment> {
        let mut acc = LocationAccumulator::new();
        for (location, score) in pairs {
            acc.add(location, *score);
        }
        acc.finish()
    }

    #[test]
    fn test_groups_by_exact_string() {
        let geo = means(&[("NY", 0.5), ("ny", -0.5), ("NY", 0.1), (" NY", 0.0)]);
        assert_eq!(geo.len(), 3);
        assert_eq!(geo[0].location, "NY");
        assert!((geo[0].sentiment - 0.3).abs() < 1e-12);
        assert_eq!(geo[1].location, "ny");
        assert_eq!(geo[2].location, " NY");
    }

    #[test]
    fn test_single_review_mean_is_its_score() {
        let geo = means(&[("Paris", 0.6369)]);
        assert_eq!(
            geo,
            vec![LocationSentiment {
                location: "Paris".to_string(),
                sentiment: 0.6369,
            }]
        );
    }

    #[test]
    fn test_empty_location_is_a_bucket() {
        let geo = means(&[("", -0.4)]);
        assert_eq!(geo.len(), 1);
        assert_eq!(geo[0].location, "");
    }

    #[test]
    fn test_no_pairs() {
        assert!(means(&[]).is_empty());
    }
}
