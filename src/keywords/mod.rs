// Keyword extraction: stop-word lists, text normalization, and the
// corpus-wide frequency table behind `topKeywords`.

pub mod frequency;
pub mod stopwords;
pub mod tokenize;
