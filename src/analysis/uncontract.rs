//! Contraction expansion.
//!
//! Maps a normalized word to its expanded multi-word phrase via a fixed
//! table. Lookup is case-insensitive; the expansion is case-synced against
//! the input, so `Don't` becomes `Do not`.
//!
//! Forms ending in `'s`/`'d` (`she's`, `he'd`, `item's`) are deliberately
//! absent: they are lexically ambiguous (possessive vs. "is" vs. "has" vs.
//! "would") and are handled by the grouping keys instead, which make both the
//! bare stem and the full form guessable.

use ahash::AHashMap;

use crate::analysis::normalizer::sync_case;

/// Fixed contraction table, keys lower-cased.
const CONTRACTIONS: &[(&str, &str)] = &[
    ("don't", "do not"),
    ("doesn't", "does not"),
    ("didn't", "did not"),
    ("haven't", "have not"),
    ("hadn't", "had not"),
    ("shouldn't", "should not"),
    ("wouldn't", "would not"),
    ("couldn't", "could not"),
    ("mustn't", "must not"),
    ("can't", "cannot"),
    ("needn't", "need not"),
    ("won't", "will not"),
    ("i'm", "I am"),
    ("i've", "I have"),
    ("i'll", "I will"),
    ("she'll", "she will"),
    ("he'll", "he will"),
    ("we're", "we are"),
    ("we've", "we have"),
    ("we'll", "we will"),
    ("they're", "they are"),
    ("they've", "they have"),
    ("they'll", "they will"),
];

/// Expands known contractions into their full phrases.
#[derive(Clone, Debug)]
pub struct Uncontractor {
    contractions: AHashMap<String, String>,
}

impl Uncontractor {
    /// Create a new uncontractor with the default contraction table.
    pub fn new() -> Self {
        Uncontractor {
            contractions: CONTRACTIONS
                .iter()
                .map(|&(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        }
    }

    /// Expand a normalized word into its full phrase, or return it unchanged
    /// if it is not a known contraction.
    pub fn uncontract(&self, normalized: &str) -> String {
        match self.contractions.get(&normalized.to_lowercase()) {
            Some(phrase) => sync_case(normalized, phrase),
            None => normalized.to_string(),
        }
    }
}

impl Default for Uncontractor {
    fn default() -> Self {
        Self::new()
    }
}
