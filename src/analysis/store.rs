//! Mutable lexeme storage used during the single analysis scan.
//!
//! Holds the forward sequence, the reverse group index, and the two running
//! counters. Appends and tail deletions both keep the bookkeeping intact:
//! `word_like_count + other_character_count == lexemes.len()` at all times,
//! and every group key maps to a non-empty bucket.
//!
//! The tail deletion (`delete_trailing_while`) is what makes
//! whitespace-before-punctuation collapsing possible without input lookahead:
//! the analyzer appends optimistically and rolls back when a punctuation or
//! newline lexeme arrives.

use std::collections::BTreeMap;

use crate::analysis::grouping::group_keys;
use crate::analysis::lexeme::{Lexeme, LexemeAnalysis, WordLikeIndex};

/// Index-addressed collection of accepted lexemes plus derived bookkeeping.
///
/// Created fresh per analysis call and consumed by [`LexemeStore::into_analysis`].
#[derive(Debug, Default)]
pub struct LexemeStore {
    lexemes: Vec<Lexeme>,
    lexemes_by_word_like: WordLikeIndex,
    word_like_count: usize,
    other_character_count: usize,
}

impl LexemeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored lexemes.
    pub fn len(&self) -> usize {
        self.lexemes.len()
    }

    /// True if no lexeme has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.lexemes.is_empty()
    }

    /// Current count of `Word`/`Letter` lexemes.
    pub fn word_like_count(&self) -> usize {
        self.word_like_count
    }

    /// Current count of `WordHelping`/`SpecialCharacter` lexemes.
    pub fn other_character_count(&self) -> usize {
        self.other_character_count
    }

    /// Append a lexeme at the next dense index.
    ///
    /// Word-like lexemes are additionally inserted into every group bucket
    /// derived from their normalized form, creating buckets as needed.
    pub fn add(&mut self, lexeme: Lexeme) {
        let index = self.lexemes.len();

        if lexeme.is_other_character() {
            self.other_character_count += 1;
        } else {
            self.word_like_count += 1;

            for key in group_keys(&lexeme.normalized) {
                self.lexemes_by_word_like
                    .entry(key)
                    .or_insert_with(BTreeMap::new)
                    .insert(index, lexeme.clone());
            }
        }

        self.lexemes.push(lexeme);
    }

    /// Delete trailing lexemes while the predicate holds.
    ///
    /// Walks backward from the highest index, reversing all bookkeeping for
    /// each removed lexeme and pruning group buckets that become empty. Stops
    /// at the first non-matching lexeme or an empty store.
    pub fn delete_trailing_while<F>(&mut self, predicate: F)
    where
        F: Fn(&Lexeme) -> bool,
    {
        while self.lexemes.last().is_some_and(&predicate) {
            let index = self.lexemes.len() - 1;
            let Some(lexeme) = self.lexemes.pop() else {
                break;
            };

            if lexeme.is_other_character() {
                self.other_character_count -= 1;
            } else {
                self.word_like_count -= 1;

                for key in group_keys(&lexeme.normalized) {
                    if let Some(bucket) = self.lexemes_by_word_like.get_mut(&key) {
                        bucket.remove(&index);

                        if bucket.is_empty() {
                            self.lexemes_by_word_like.remove(&key);
                        }
                    }
                }
            }
        }
    }

    /// True iff the most recent `n` lexemes all exist and satisfy the
    /// predicate.
    pub fn last_n_match<F>(&self, n: usize, predicate: F) -> bool
    where
        F: Fn(&Lexeme) -> bool,
    {
        if n > self.lexemes.len() {
            return false;
        }

        self.lexemes[self.lexemes.len() - n..].iter().all(predicate)
    }

    /// Hand the finished state off as an immutable analysis snapshot.
    pub fn into_analysis(self) -> LexemeAnalysis {
        LexemeAnalysis {
            lexemes: self.lexemes,
            lexemes_by_word_like: self.lexemes_by_word_like,
            word_like_count: self.word_like_count,
            other_character_count: self.other_character_count,
        }
    }
}
