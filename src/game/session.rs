//! Guess session: reveal tracking and scoring.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::analysis::lexeme::LexemeAnalysis;
use crate::error::{LexiguessError, Result};

/// One play-through of a text: the analysis plus the revealed indices and the
/// running score.
///
/// Only `Word`/`Letter` lexemes are revealable; everything else renders
/// verbatim from the start, so the revealed set holds word-like indices only.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GuessSession {
    analysis: LexemeAnalysis,
    revealed: BTreeSet<usize>,
    score: usize,
}

impl GuessSession {
    /// Start a fresh session over an analysis.
    pub fn new(analysis: LexemeAnalysis) -> Self {
        GuessSession {
            analysis,
            revealed: BTreeSet::new(),
            score: 0,
        }
    }

    /// The underlying analysis.
    pub fn analysis(&self) -> &LexemeAnalysis {
        &self.analysis
    }

    /// Indices of the lexemes revealed so far.
    pub fn revealed(&self) -> &BTreeSet<usize> {
        &self.revealed
    }

    /// Resolve a typed guess.
    ///
    /// The guess is trimmed and lower-cased, then looked up in the group
    /// index. Every not-yet-revealed occurrence in the matched bucket is
    /// revealed and scored. Returns the newly-revealed count; 0 for a miss or
    /// an already-exhausted word.
    pub fn guess(&mut self, word: &str) -> usize {
        let key = word.trim().to_lowercase();
        let Some(bucket) = self.analysis.lexemes_by_word_like.get(&key) else {
            return 0;
        };

        let mut newly_revealed = 0;
        for &index in bucket.keys() {
            if self.revealed.insert(index) {
                newly_revealed += 1;
            }
        }

        self.score += newly_revealed;
        newly_revealed
    }

    /// Reveal a single lexeme by index, the click equivalent.
    ///
    /// Returns `Ok(true)` if the lexeme was newly revealed, `Ok(false)` if it
    /// was revealed already, and an error for an out-of-range index or a
    /// non-word lexeme.
    pub fn reveal_index(&mut self, index: usize) -> Result<bool> {
        let lexeme = self
            .analysis
            .lexemes
            .get(index)
            .ok_or_else(|| LexiguessError::invalid_operation(format!("no lexeme at index {index}")))?;

        if !lexeme.is_word_like() {
            return Err(LexiguessError::invalid_operation(format!(
                "lexeme at index {index} is not a guessable word"
            )));
        }

        let newly_revealed = self.revealed.insert(index);
        if newly_revealed {
            self.score += 1;
        }

        Ok(newly_revealed)
    }

    /// The current score: total lexemes revealed so far.
    pub fn score(&self) -> usize {
        self.score
    }

    /// The score denominator: count of guessable lexemes in the text.
    pub fn total(&self) -> usize {
        self.analysis.word_like_count
    }

    /// True once every word-like lexeme has been revealed.
    pub fn is_complete(&self) -> bool {
        self.revealed.len() >= self.analysis.word_like_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::LexemeAnalyzer;

    fn session(text: &str) -> GuessSession {
        GuessSession::new(LexemeAnalyzer::new().analyze(text))
    }

    #[test]
    fn test_guess_reveals_every_occurrence() {
        let mut session = session("one two one ONE");

        assert_eq!(session.guess("one"), 3);
        assert_eq!(session.score(), 3);
        // Second guess of the same word reveals nothing new.
        assert_eq!(session.guess("one"), 0);
        assert_eq!(session.score(), 3);
    }

    #[test]
    fn test_guess_is_trimmed_and_case_insensitive() {
        let mut session = session("Apple");
        assert_eq!(session.guess("  APPLE "), 1);
    }

    #[test]
    fn test_miss_returns_zero() {
        let mut session = session("one two");
        assert_eq!(session.guess("three"), 0);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_stem_and_full_form_reveal_the_same_lexeme() {
        let mut session = session("she'd");
        assert_eq!(session.guess("she"), 1);
        // Already revealed through the stem key.
        assert_eq!(session.guess("she'd"), 0);
        assert!(session.is_complete());
    }

    #[test]
    fn test_contraction_guessable_as_its_parts() {
        let mut session = session("don't");
        assert_eq!(session.guess("do"), 1);
        assert_eq!(session.guess("not"), 1);
        assert!(session.is_complete());
    }

    #[test]
    fn test_reveal_index() {
        let mut session = session("one two");

        assert!(session.reveal_index(0).is_ok_and(|newly| newly));
        assert!(session.reveal_index(0).is_ok_and(|newly| !newly));
        assert_eq!(session.score(), 1);

        // Index 1 is the space between the words.
        assert!(session.reveal_index(1).is_err());
        assert!(session.reveal_index(99).is_err());
    }

    #[test]
    fn test_completion_and_total() {
        let mut session = session("one two");
        assert_eq!(session.total(), 2);
        assert!(!session.is_complete());

        session.guess("one");
        session.guess("two");
        assert!(session.is_complete());
        assert_eq!(session.score(), 2);
    }
}
