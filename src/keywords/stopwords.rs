// English stop-word sets.
//
// Two lists are available. The compact NLTK list (179 words) is bundled here
// and is the default: it removes function words but keeps evaluative words
// like "good" or "great" that matter in product reviews. The much larger
// stopwords-iso list comes from the `stop-words` crate and is useful when the
// keyword table is dominated by filler.
//
// Both sets are built once per process and cloned out on demand.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use stop_words::{get, LANGUAGE};

const NLTK_ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're",
    "you've", "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him",
    "his", "himself", "she", "she's", "her", "hers", "herself", "it", "it's", "its",
    "itself", "they", "them", "their", "theirs", "themselves", "what", "which", "who",
    "whom", "this", "that", "that'll", "these", "those", "am", "is", "are", "was",
    "were", "be", "been", "being", "have", "has", "had", "having", "do", "does", "did",
    "doing", "a", "an", "the", "and", "but", "if", "or", "because", "as", "until",
    "while", "of", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "to", "from", "up",
    "down", "in", "out", "on", "off", "over", "under", "again", "further", "then",
    "once", "here", "there", "when", "where", "why", "how", "all", "any", "both",
    "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not", "only",
    "own", "same", "so", "than", "too", "very", "s", "t", "can", "will", "just", "don",
    "don't", "should", "should've", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain",
    "aren", "aren't", "couldn", "couldn't", "didn", "didn't", "doesn", "doesn't",
    "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn", "isn't", "ma",
    "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

static NLTK_SET: LazyLock<StopWords> =
    LazyLock::new(|| StopWords::from_words(NLTK_ENGLISH.iter().copied()));

static ISO_SET: LazyLock<StopWords> =
    LazyLock::new(|| StopWords::from_words(get(LANGUAGE::English)));

/// Which built-in English stop list to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopList {
    #[default]
    Nltk,
    Iso,
}

impl FromStr for StopList {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nltk" => Ok(StopList::Nltk),
            "iso" => Ok(StopList::Iso),
            other => Err(format!(
                "unknown stop-word list '{other}' (expected 'nltk' or 'iso')"
            )),
        }
    }
}

impl fmt::Display for StopList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopList::Nltk => f.write_str("nltk"),
            StopList::Iso => f.write_str("iso"),
        }
    }
}

/// A case-insensitive set of words excluded from keyword counting.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// The default English list (NLTK).
    pub fn english() -> Self {
        NLTK_SET.clone()
    }

    pub fn for_list(list: StopList) -> Self {
        match list {
            StopList::Nltk => NLTK_SET.clone(),
            StopList::Iso => ISO_SET.clone(),
        }
    }

    /// Build a set from arbitrary words. Entries are lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        // Callers usually pass lowercase tokens; only allocate when they don't
        word.chars().any(char::is_uppercase) && self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
