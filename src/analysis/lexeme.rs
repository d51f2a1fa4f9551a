//! Lexeme types and the analysis result aggregate.
//!
//! A [`Lexeme`] is one typed, positioned unit of the tokenized text. The
//! [`LexemeAnalysis`] aggregate is the final output of
//! [`LexemeAnalyzer::analyze`](crate::analysis::analyzer::LexemeAnalyzer::analyze):
//! the linear rendering sequence plus the reverse group index consumed by
//! rendering and guess-resolution collaborators.
//!
//! # Examples
//!
//! ```
//! use lexiguess::analysis::analyzer::LexemeAnalyzer;
//! use lexiguess::analysis::lexeme::LexemeType;
//!
//! let analysis = LexemeAnalyzer::new().analyze("she'd");
//! assert_eq!(analysis.lexemes.len(), 1);
//! assert_eq!(analysis.lexemes[0].kind, LexemeType::Word);
//! // Guessable both as the stem and as the full contracted form.
//! assert!(analysis.lexemes_by_word_like.contains_key("she"));
//! assert!(analysis.lexemes_by_word_like.contains_key("she'd"));
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use ahash::RandomState;
use serde::{Deserialize, Serialize};

use crate::analysis::classify::classify;

/// Reverse index from a lower-cased group key to the lexemes it resolves to,
/// keyed by their position in the forward sequence.
pub type WordLikeIndex = HashMap<String, BTreeMap<usize, Lexeme>, RandomState>;

/// Classification of a lexeme by its normalized form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LexemeType {
    /// A multi-character word (including hyphenated compounds and
    /// contractions kept whole, e.g. `she'd`)
    Word,
    /// A single A-Z/a-z character standing alone
    Letter,
    /// A single apostrophe or hyphen acting as a standalone lexeme
    WordHelping,
    /// Any other single non-word character, including space and newline
    SpecialCharacter,
}

/// A single analyzed unit of text.
///
/// Immutable once stored. The `uncontracted` field is fixed at construction
/// time via [`Lexeme::with_uncontracted`]; for the split parts of an expanded
/// contraction it holds the whole phrase (`"Do not"` on both `"Do"` and
/// `"not"`) so consumers can recover the full expansion from any fragment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexeme {
    /// Character offset of the first character of the original primitive
    /// unit in the trimmed source text
    pub start_index: usize,

    /// Character offset of the last character of the original primitive unit
    /// in the trimmed source text (inclusive)
    pub end_index: usize,

    /// The raw captured substring, case and glyphs as typed
    pub original: String,

    /// The per-character-normalized, word-substituted form, case-synced to
    /// the original
    pub normalized: String,

    /// The fully expanded phrase this lexeme belongs to; equals `normalized`
    /// unless the word is a known contraction
    pub uncontracted: String,

    /// Lexeme classification derived from `normalized`
    #[serde(rename = "type")]
    pub kind: LexemeType,
}

impl Lexeme {
    /// Create a new lexeme spanning `start_index..=end_index`.
    ///
    /// The classification is derived from the normalized form and the
    /// `uncontracted` field defaults to `normalized`.
    pub fn new<S: Into<String>, N: Into<String>>(
        original: S,
        normalized: N,
        start_index: usize,
        end_index: usize,
    ) -> Self {
        let normalized = normalized.into();
        let kind = classify(&normalized);
        Lexeme {
            start_index,
            end_index,
            original: original.into(),
            uncontracted: normalized.clone(),
            normalized,
            kind,
        }
    }

    /// Set the uncontracted phrase this lexeme belongs to.
    ///
    /// Used when a contraction is split: every emitted part, including the
    /// interstitial spaces, carries the whole expanded phrase.
    pub fn with_uncontracted<S: Into<String>>(mut self, phrase: S) -> Self {
        self.uncontracted = phrase.into();
        self
    }

    /// True for `Word` and `Letter` lexemes, the independently guessable
    /// units of the text.
    pub fn is_word_like(&self) -> bool {
        matches!(self.kind, LexemeType::Word | LexemeType::Letter)
    }

    /// True for `WordHelping` and `SpecialCharacter` lexemes.
    pub fn is_other_character(&self) -> bool {
        !self.is_word_like()
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.normalized)
    }
}

/// The finished result of analyzing one text.
///
/// Handed off by value from the store once the single scan completes; nothing
/// mutates it afterwards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LexemeAnalysis {
    /// The final, linear rendering sequence. The vector index is the lexeme
    /// index: dense `0..N-1`, in left-to-right order.
    pub lexemes: Vec<Lexeme>,

    /// Group key → ordered map of lexeme index → lexeme, used to resolve a
    /// user guess to all matching occurrences.
    pub lexemes_by_word_like: WordLikeIndex,

    /// Count of `Word` and `Letter` lexemes.
    pub word_like_count: usize,

    /// Count of `WordHelping` and `SpecialCharacter` lexemes.
    pub other_character_count: usize,
}

impl LexemeAnalysis {
    /// Resolve a user guess to its bucket of occurrences, if any.
    ///
    /// The guess is lower-cased before lookup; group keys are stored
    /// lower-cased.
    pub fn lexemes_for_word(&self, word: &str) -> Option<&BTreeMap<usize, Lexeme>> {
        self.lexemes_by_word_like.get(&word.to_lowercase())
    }
}
