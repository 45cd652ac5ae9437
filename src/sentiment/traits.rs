// Polarity scorer trait: the swap-ready abstraction.
//
// The default implementation is the bundled LexiconScorer. Anything that can
// turn a review's raw text into a signed compound score can stand in for it,
// including wrappers around external tools that may fail on some inputs.

use anyhow::Result;

/// Scores a single text for sentiment polarity.
///
/// Implementations must be deterministic for identical input and must not
/// perform network I/O. They are shared across threads when a large batch is
/// scored in parallel.
pub trait PolarityScorer: Send + Sync {
    /// Compound score for `text` in `[-1.0, 1.0]`: positive text above zero,
    /// negative below, neutral or mixed near zero.
    ///
    /// An `Err` means this one text could not be scored. The aggregator
    /// leaves that review out of the report instead of failing the batch.
    fn score(&self, text: &str) -> Result<f64>;

    /// Short identifier used in log output.
    fn name(&self) -> &'static str {
        "custom"
    }
}
