// Polarity scoring: trait-based abstraction for swappable scorers.
//
// The PolarityScorer trait defines the interface. LexiconScorer implements
// it with a bundled valence lexicon and grammatical rules, so scoring never
// leaves the process.

pub mod lexicon;
pub mod traits;
