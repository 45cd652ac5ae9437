// Rule-based lexicon scorer.
//
// Each word found in the valence lexicon contributes its valence, adjusted by
// the words around it:
// - boosters ("very", "extremely") and dampeners ("slightly") in the three
//   preceding words scale it, with less effect the further back they are
// - a negation in the same window flips and damps it
// - an ALL-CAPS sentiment word in otherwise mixed-case text is emphasized
// - "but" halves everything before it and adds half again to everything after
// Exclamation and question marks then push the sum further from zero, and the
// sum is squashed into [-1, 1]. Text with no lexicon hits scores exactly 0.0.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use anyhow::{Context, Result};

use super::traits::PolarityScorer;

const BUNDLED_LEXICON: &str = include_str!("lexicon.tsv");

/// Scalar added by a booster word (negative for dampeners).
const BOOST_INCREMENT: f64 = 0.293;
/// Emphasis for an ALL-CAPS sentiment word among mixed-case words.
const CAPS_INCREMENT: f64 = 0.733;
/// Negation multiplier.
const NEGATION_SCALAR: f64 = -0.74;
/// Squash constant: compound = s / sqrt(s^2 + alpha).
const NORMALIZATION_ALPHA: f64 = 15.0;

const EXCLAMATION_STEP: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_STEP: f64 = 0.18;
const QUESTION_CAP: f64 = 0.96;

const BOOSTERS: &[&str] = &[
    "absolutely", "amazingly", "awfully", "completely", "considerably", "decidedly",
    "deeply", "enormously", "entirely", "especially", "exceptionally", "extremely",
    "fabulously", "fully", "greatly", "highly", "hugely", "incredibly", "intensely",
    "majorly", "more", "most", "particularly", "purely", "quite", "really", "remarkably",
    "so", "substantially", "super", "thoroughly", "totally", "tremendously",
    "unbelievably", "unusually", "utterly", "very",
];

const DAMPENERS: &[&str] = &[
    "almost", "barely", "hardly", "kinda", "less", "little", "marginally", "occasionally",
    "partly", "scarcely", "slightly", "somewhat", "sorta",
];

const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "dont",
    "hadnt", "hasnt", "havent", "isnt", "mightnt", "mustnt", "neednt", "oughtnt", "shant",
    "shouldnt", "wasnt", "werent", "wont", "wouldnt", "neither", "never", "none", "nope",
    "nor", "not", "nothing", "nowhere", "without", "rarely", "seldom", "despite",
];

static DEFAULT_LEXICON: LazyLock<Arc<HashMap<String, f64>>> = LazyLock::new(|| {
    Arc::new(parse_lexicon(BUNDLED_LEXICON).expect("bundled lexicon is well-formed"))
});

/// Parse a tab-separated `word<TAB>valence` lexicon. Blank lines and lines
/// starting with `#` are ignored. Words are lowercased.
pub fn parse_lexicon(tsv: &str) -> Result<HashMap<String, f64>> {
    let mut lexicon = HashMap::new();
    for (lineno, line) in tsv.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (word, valence) = line
            .split_once('\t')
            .with_context(|| format!("lexicon line {}: expected <word>\\t<valence>", lineno + 1))?;
        let valence: f64 = valence
            .trim()
            .parse()
            .with_context(|| format!("lexicon line {}: bad valence '{valence}'", lineno + 1))?;
        lexicon.insert(word.trim().to_lowercase(), valence);
    }
    Ok(lexicon)
}

/// Lexicon-and-rules polarity scorer. Cheap to clone; the lexicon is shared.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    lexicon: Arc<HashMap<String, f64>>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self {
            lexicon: Arc::clone(&DEFAULT_LEXICON),
        }
    }
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom word -> valence table instead of the bundled one.
    pub fn with_lexicon(lexicon: HashMap<String, f64>) -> Self {
        let lexicon = lexicon
            .into_iter()
            .map(|(w, v)| (w.to_lowercase(), v))
            .collect();
        Self {
            lexicon: Arc::new(lexicon),
        }
    }

    pub fn lexicon_len(&self) -> usize {
        self.lexicon.len()
    }

    /// Compound polarity of `text` in [-1, 1].
    pub fn compound(&self, text: &str) -> f64 {
        let words: Vec<&str> = text
            .split_whitespace()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|w| !w.is_empty())
            .collect();
        if words.is_empty() {
            return 0.0;
        }
        let lowers: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        let cap_diff = mixed_caps(&words);

        let mut valences: Vec<f64> = Vec::with_capacity(words.len());
        for (i, lower) in lowers.iter().enumerate() {
            if booster_scalar(lower).is_some() {
                valences.push(0.0);
                continue;
            }
            let Some(&base) = self.lexicon.get(lower) else {
                valences.push(0.0);
                continue;
            };

            let mut valence = base;
            if cap_diff && is_all_caps(words[i]) {
                valence += CAPS_INCREMENT.copysign(valence);
            }

            // Look back up to three words for modifiers
            for distance in 1..=3 {
                if i < distance {
                    break;
                }
                let j = i - distance;
                if self.lexicon.contains_key(&lowers[j]) {
                    continue;
                }
                let mut scalar = modifier_scalar(words[j], &lowers[j], valence, cap_diff);
                match distance {
                    2 => scalar *= 0.95,
                    3 => scalar *= 0.9,
                    _ => {}
                }
                valence += scalar;
                if is_negation(&lowers[j]) {
                    valence *= NEGATION_SCALAR;
                }
            }

            valences.push(valence);
        }

        apply_but_rule(&lowers, &mut valences);

        let mut sum: f64 = valences.iter().sum();
        if sum != 0.0 {
            sum += punctuation_emphasis(text).copysign(sum);
        }
        normalize(sum)
    }
}

impl PolarityScorer for LexiconScorer {
    fn score(&self, text: &str) -> Result<f64> {
        Ok(self.compound(text))
    }

    fn name(&self) -> &'static str {
        "lexicon"
    }
}

fn booster_scalar(lower: &str) -> Option<f64> {
    if BOOSTERS.contains(&lower) {
        Some(BOOST_INCREMENT)
    } else if DAMPENERS.contains(&lower) {
        Some(-BOOST_INCREMENT)
    } else {
        None
    }
}

/// Scalar a preceding word applies to a sentiment word's valence.
fn modifier_scalar(word: &str, lower: &str, valence: f64, cap_diff: bool) -> f64 {
    let Some(mut scalar) = booster_scalar(lower) else {
        return 0.0;
    };
    if valence < 0.0 {
        scalar = -scalar;
    }
    if cap_diff && is_all_caps(word) {
        scalar += CAPS_INCREMENT.copysign(valence);
    }
    scalar
}

fn is_negation(lower: &str) -> bool {
    NEGATIONS.contains(&lower) || lower.contains("n't") || lower.contains("n’t")
}

fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_alphabetic) && !word.chars().any(char::is_lowercase)
}

/// True when some words are ALL CAPS but not all of them.
fn mixed_caps(words: &[&str]) -> bool {
    let caps = words.iter().filter(|w| is_all_caps(w)).count();
    caps > 0 && caps < words.len()
}

fn apply_but_rule(lowers: &[String], valences: &mut [f64]) {
    let Some(pivot) = lowers.iter().position(|w| w == "but") else {
        return;
    };
    for (k, v) in valences.iter_mut().enumerate() {
        if k < pivot {
            *v *= 0.5;
        } else if k > pivot {
            *v *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();
    let question_amp = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_STEP,
        _ => QUESTION_CAP,
    };
    exclamations as f64 * EXCLAMATION_STEP + question_amp
}

fn normalize(sum: f64) -> f64 {
    (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}
