// Corpus-wide keyword frequency table.
//
// Counts are accumulated across every review in the batch, not per review.
// Ranking is by count descending with ties kept in first-encountered order,
// so the same batch always produces the same list.

use std::collections::HashMap;

use crate::models::KeywordCount;

use super::stopwords::StopWords;
use super::tokenize::normalize;

/// Default length of the `topKeywords` list.
pub const DEFAULT_TOP_KEYWORDS: usize = 30;

/// Accumulates token counts in insertion order.
#[derive(Debug, Default)]
pub struct KeywordCounter {
    index: HashMap<String, usize>,
    counts: Vec<KeywordCount>,
}

impl KeywordCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, token: String) {
        match self.index.get(&token) {
            Some(&i) => self.counts[i].count += 1,
            None => {
                self.index.insert(token.clone(), self.counts.len());
                self.counts.push(KeywordCount {
                    word: token,
                    count: 1,
                });
            }
        }
    }

    /// Tokenize `text` and count every keyword in it.
    pub fn add_text(&mut self, text: &str, stop_words: &StopWords) {
        for token in normalize(text, stop_words) {
            self.add(token);
        }
    }

    /// Number of distinct words seen so far.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// The `n` most frequent words, highest count first.
    pub fn top(self, n: usize) -> Vec<KeywordCount> {
        let mut counts = self.counts;
        // sort_by is stable: equal counts stay in first-seen order
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts.truncate(n);
        counts
    }
}
