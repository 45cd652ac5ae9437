// Statistics over per-review scores: overall sentiment, polarity
// breakdown, and per-location averages.

pub mod geography;
pub mod summary;
