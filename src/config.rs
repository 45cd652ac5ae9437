use std::env;

use anyhow::{Context, Result};

use crate::keywords::frequency::DEFAULT_TOP_KEYWORDS;
use crate::keywords::stopwords::StopList;
use crate::pipeline::aggregate::{AggregatorConfig, DEFAULT_PARALLEL_THRESHOLD};

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// setting has a default, so an empty environment is valid. CLI flags
/// override whatever is loaded here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of keywords in the report (SENTIMENT_TOP_KEYWORDS)
    pub top_keywords: usize,
    /// Which English stop list to filter keywords with (SENTIMENT_STOP_WORDS)
    pub stop_list: StopList,
    /// Batch size at which scoring runs in parallel (SENTIMENT_PARALLEL_THRESHOLD)
    pub parallel_threshold: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_keywords: DEFAULT_TOP_KEYWORDS,
            stop_list: StopList::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let top_keywords = parse_usize(&lookup, "SENTIMENT_TOP_KEYWORDS")?
            .unwrap_or(defaults.top_keywords);

        let stop_list = match lookup("SENTIMENT_STOP_WORDS") {
            Some(raw) => raw
                .parse::<StopList>()
                .map_err(anyhow::Error::msg)
                .context("invalid SENTIMENT_STOP_WORDS")?,
            None => defaults.stop_list,
        };

        let parallel_threshold = parse_usize(&lookup, "SENTIMENT_PARALLEL_THRESHOLD")?
            .unwrap_or(defaults.parallel_threshold);

        Ok(Self {
            top_keywords,
            stop_list,
            parallel_threshold,
        })
    }

    /// The subset of settings the aggregator itself needs.
    pub fn aggregator_config(&self) -> AggregatorConfig {
        AggregatorConfig {
            top_keywords: self.top_keywords,
            parallel_threshold: self.parallel_threshold,
        }
    }
}

fn parse_usize<F>(lookup: &F, key: &str) -> Result<Option<usize>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => {
            let value = raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("{key} must be a non-negative integer, got '{raw}'"))?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.top_keywords, 30);
        assert_eq!(config.stop_list, StopList::Nltk);
    }

    #[test]
    fn test_reads_overrides() {
        let config = load(&[
            ("SENTIMENT_TOP_KEYWORDS", "10"),
            ("SENTIMENT_STOP_WORDS", "iso"),
            ("SENTIMENT_PARALLEL_THRESHOLD", " 64 "),
        ])
        .unwrap();
        assert_eq!(config.top_keywords, 10);
        assert_eq!(config.stop_list, StopList::Iso);
        assert_eq!(config.parallel_threshold, 64);
    }

    #[test]
    fn test_bad_number_names_variable() {
        let err = load(&[("SENTIMENT_TOP_KEYWORDS", "lots")]).unwrap_err();
        assert!(format!("{err:#}").contains("SENTIMENT_TOP_KEYWORDS"));
    }

    #[test]
    fn test_bad_stop_list() {
        assert!(load(&[("SENTIMENT_STOP_WORDS", "german")]).is_err());
    }

    #[test]
    fn test_aggregator_config() {
        let config = load(&[("SENTIMENT_TOP_KEYWORDS", "5")]).unwrap();
        assert_eq!(config.aggregator_config().top_keywords, 5);
    }
}
