//! The lexeme analyzer: a single-pass scanner over trimmed input text.
//!
//! Applies the following rules:
//! - Word-forming characters (letters, apostrophe, hyphen) accumulate into a
//!   buffer flushed at the word boundary; every other character is its own
//!   primitive lexeme
//! - Keeps only the first letter upper case if it is upper case in the
//!   original word
//! - Splits known contractions (`don't`, `we'll`, `they've`) into individual
//!   lexemes sharing the contraction's span
//! - Replaces trailing spaces followed by a punctuation or newline with just
//!   the punctuation or newline
//! - Allows the very first lexeme only if it is a word or a letter
//! - No more than two newline lexemes in a row, no more than one space
//!
//! # Examples
//!
//! ```
//! use lexiguess::analysis::analyzer::LexemeAnalyzer;
//!
//! let analyzer = LexemeAnalyzer::new();
//! let analysis = analyzer.analyze("DoN'T!");
//!
//! let normalized: Vec<&str> = analysis.lexemes.iter().map(|l| l.normalized.as_str()).collect();
//! assert_eq!(normalized, vec!["Do", " ", "not", "!"]);
//! assert_eq!(analysis.lexemes[0].uncontracted, "Do not");
//! ```

use crate::analysis::lexeme::{Lexeme, LexemeAnalysis};
use crate::analysis::normalizer::{CharacterNormalizer, WordNormalizer, is_word_character};
use crate::analysis::store::LexemeStore;
use crate::analysis::uncontract::Uncontractor;

/// Punctuation marks that absorb the spaces stored immediately before them.
const PUNCTUATION_CHARACTERS: &[&str] = &[",", ".", "!", "?", ";"];

/// Scan buffer for the primitive lexeme currently being accumulated.
#[derive(Debug, Default)]
struct Buffer {
    original: String,
    normalized: String,
    start_index: Option<usize>,
}

/// Converts raw text into a [`LexemeAnalysis`].
///
/// A pure, synchronous computation: one input string, one immutable result,
/// no I/O and no failure path. A fresh [`LexemeStore`] is built per call, so
/// concurrent calls are independent.
#[derive(Clone, Debug, Default)]
pub struct LexemeAnalyzer {
    characters: CharacterNormalizer,
    words: WordNormalizer,
    uncontractor: Uncontractor,
}

impl LexemeAnalyzer {
    /// Create a new analyzer with the default normalization tables.
    pub fn new() -> Self {
        LexemeAnalyzer {
            characters: CharacterNormalizer::new(),
            words: WordNormalizer::new(),
            uncontractor: Uncontractor::new(),
        }
    }

    /// Analyze a text into its lexeme sequence and group index.
    ///
    /// Leading and trailing whitespace is trimmed before scanning; embedded
    /// whitespace and newlines are significant. Offsets in the result are
    /// character positions into the trimmed text.
    pub fn analyze(&self, raw_text: &str) -> LexemeAnalysis {
        let text: Vec<char> = raw_text.trim().chars().collect();
        let mut store = LexemeStore::new();
        let mut buffer = Buffer::default();

        for (i, &character) in text.iter().enumerate() {
            let normalized_character = self.characters.normalize(character);
            // One character of lookahead: a word ends where the next
            // normalized character is not word-forming, or at end of input.
            let is_word_boundary = text
                .get(i + 1)
                .map(|&next| self.characters.normalize(next))
                .is_none_or(|next| !is_word_character(next));

            if buffer.start_index.is_none() {
                buffer.start_index = Some(i);
            }

            let flush = if is_word_character(normalized_character) {
                buffer.original.push(character);
                buffer.normalized.push(normalized_character);

                if is_word_boundary {
                    buffer.normalized = self.words.normalize(&buffer.original, &buffer.normalized);
                }

                is_word_boundary
            } else {
                // Singletons never accumulate: two adjacent spaces are two
                // separate primitive lexemes.
                buffer.original = character.to_string();
                buffer.normalized = normalized_character.to_string();
                true
            };

            if flush {
                let start_index = buffer.start_index.unwrap_or(i);
                self.process_primitive(
                    &mut store,
                    &buffer.original,
                    &buffer.normalized,
                    start_index,
                    i,
                    None,
                );
                buffer = Buffer::default();
            }
        }

        store.into_analysis()
    }

    /// Run one primitive lexeme through uncontraction, collapsing, and
    /// admission.
    ///
    /// `phrase_override` carries the whole expanded phrase down to the split
    /// parts of a contraction.
    fn process_primitive(
        &self,
        store: &mut LexemeStore,
        original: &str,
        normalized: &str,
        start_index: usize,
        end_index: usize,
        phrase_override: Option<&str>,
    ) {
        let uncontracted = self.uncontractor.uncontract(normalized);

        // Uncontraction is applied after normalization: when the expansion
        // differs, the phrase is split into separate lexemes (`do` and `not`)
        // instead of being stored whole.
        if uncontracted != normalized {
            self.process_uncontracted(store, original, &uncontracted, start_index, end_index);
            return;
        }

        let mut lexeme = Lexeme::new(original, normalized, start_index, end_index);
        if let Some(phrase) = phrase_override {
            lexeme = lexeme.with_uncontracted(phrase);
        }

        let is_last_space = store.last_n_match(1, |stored| stored.normalized == " ");
        let is_punctuation = PUNCTUATION_CHARACTERS.contains(&normalized);
        let is_newline = normalized == "\n";

        // Replace trailing spaces followed by a punctuation or a newline with
        // just the punctuation or newline.
        if is_last_space && (is_punctuation || is_newline) {
            store.delete_trailing_while(|stored| stored.normalized == " ");
        }

        if Self::can_add(store, &lexeme) {
            store.add(lexeme);
        }
    }

    /// Split an expanded phrase into word lexemes with interstitial spaces.
    ///
    /// Every part, the spaces included, shares the original contraction's
    /// span and carries the whole phrase as its `uncontracted` form.
    fn process_uncontracted(
        &self,
        store: &mut LexemeStore,
        original: &str,
        phrase: &str,
        start_index: usize,
        end_index: usize,
    ) {
        let parts: Vec<&str> = phrase.split(' ').collect();

        for (n, part) in parts.iter().enumerate() {
            let normalized = self.words.normalize(original, part);
            self.process_primitive(store, original, &normalized, start_index, end_index, Some(phrase));

            if n + 1 < parts.len() {
                self.process_primitive(store, " ", " ", start_index, end_index, Some(phrase));
            }
        }
    }

    /// Admission rules for a candidate lexeme.
    fn can_add(store: &LexemeStore, lexeme: &Lexeme) -> bool {
        if store.is_empty() {
            // Allow the very first lexeme only if it's a word or a letter.
            return lexeme.is_word_like();
        }

        // No more than two newlines in a row.
        if lexeme.normalized == "\n" && store.last_n_match(2, |stored| stored.normalized == "\n") {
            return false;
        }

        // No more than one space in a row.
        if lexeme.normalized == " " && store.last_n_match(1, |stored| stored.normalized == " ") {
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::lexeme::LexemeType;

    fn normalized_sequence(analysis: &LexemeAnalysis) -> Vec<String> {
        analysis.lexemes.iter().map(|l| l.normalized.clone()).collect()
    }

    #[test]
    fn test_empty_input_yields_empty_analysis() {
        let analysis = LexemeAnalyzer::new().analyze("");
        assert!(analysis.lexemes.is_empty());
        assert!(analysis.lexemes_by_word_like.is_empty());
        assert_eq!(analysis.word_like_count, 0);
        assert_eq!(analysis.other_character_count, 0);
    }

    #[test]
    fn test_whitespace_only_input_yields_empty_analysis() {
        let analysis = LexemeAnalyzer::new().analyze("  \n\t  ");
        assert!(analysis.lexemes.is_empty());
    }

    #[test]
    fn test_first_lexeme_must_be_word_like() {
        let analysis = LexemeAnalyzer::new().analyze("^!? One");
        assert_eq!(analysis.lexemes[0].normalized, "One");
        assert_eq!(analysis.lexemes[0].kind, LexemeType::Word);
    }

    #[test]
    fn test_spaces_collapse_to_one() {
        let analysis = LexemeAnalyzer::new().analyze("one     two");
        assert_eq!(normalized_sequence(&analysis), vec!["one", " ", "two"]);
    }

    #[test]
    fn test_newlines_collapse_to_two() {
        let analysis = LexemeAnalyzer::new().analyze("one\n\n\n\ntwo");
        assert_eq!(normalized_sequence(&analysis), vec!["one", "\n", "\n", "two"]);
    }

    #[test]
    fn test_trailing_spaces_absorbed_by_punctuation() {
        let analysis = LexemeAnalyzer::new().analyze("word   .");
        assert_eq!(normalized_sequence(&analysis), vec!["word", "."]);
    }

    #[test]
    fn test_trailing_space_absorbed_by_newline() {
        let analysis = LexemeAnalyzer::new().analyze("word \nnext");
        assert_eq!(normalized_sequence(&analysis), vec!["word", "\n", "next"]);
    }

    #[test]
    fn test_contraction_split_shares_span() {
        let analysis = LexemeAnalyzer::new().analyze("DoN'T!");

        assert_eq!(normalized_sequence(&analysis), vec!["Do", " ", "not", "!"]);
        for lexeme in &analysis.lexemes[..3] {
            assert_eq!(lexeme.start_index, 0);
            assert_eq!(lexeme.end_index, 4);
            assert_eq!(lexeme.uncontracted, "Do not");
        }
        assert_eq!(analysis.lexemes[0].original, "DoN'T");
        assert_eq!(analysis.lexemes[1].original, " ");
        assert_eq!(analysis.lexemes[2].original, "DoN'T");
    }

    #[test]
    fn test_lower_case_contraction_split() {
        let analysis = LexemeAnalyzer::new().analyze("don't stop");
        assert_eq!(
            normalized_sequence(&analysis),
            vec!["do", " ", "not", " ", "stop"]
        );
        assert_eq!(analysis.lexemes[0].uncontracted, "do not");
    }

    #[test]
    fn test_collapsing_never_fires_across_a_split_boundary() {
        // The space before the contraction must survive: split parts are
        // words and spaces, not punctuation, so they never trigger collapse.
        let analysis = LexemeAnalyzer::new().analyze("please don't");
        assert_eq!(
            normalized_sequence(&analysis),
            vec!["please", " ", "do", " ", "not"]
        );
    }

    #[test]
    fn test_ambiguous_contraction_stays_whole() {
        let analysis = LexemeAnalyzer::new().analyze("she'd");

        assert_eq!(analysis.lexemes.len(), 1);
        assert_eq!(analysis.lexemes[0].normalized, "she'd");
        assert_eq!(analysis.lexemes[0].uncontracted, "she'd");

        let stem_bucket = analysis.lexemes_by_word_like.get("she");
        let full_bucket = analysis.lexemes_by_word_like.get("she'd");
        assert!(stem_bucket.is_some_and(|b| b.contains_key(&0)));
        assert!(full_bucket.is_some_and(|b| b.contains_key(&0)));
    }

    #[test]
    fn test_bare_i_is_an_upper_cased_letter() {
        let analysis = LexemeAnalyzer::new().analyze("i");

        assert_eq!(analysis.lexemes.len(), 1);
        assert_eq!(analysis.lexemes[0].kind, LexemeType::Letter);
        assert_eq!(analysis.lexemes[0].normalized, "I");
        assert_eq!(analysis.lexemes[0].uncontracted, "I");
        assert!(analysis.lexemes_by_word_like.contains_key("i"));
    }

    #[test]
    fn test_em_dash_normalizes_into_compound_word() {
        let analysis = LexemeAnalyzer::new().analyze("re—g");

        assert_eq!(analysis.lexemes.len(), 1);
        assert_eq!(analysis.lexemes[0].original, "re—g");
        assert_eq!(analysis.lexemes[0].normalized, "re-g");
        assert!(analysis.lexemes_by_word_like.contains_key("re-g"));
    }

    #[test]
    fn test_standalone_hyphen_is_word_helping() {
        let analysis = LexemeAnalyzer::new().analyze("a - b");
        assert_eq!(analysis.lexemes[2].kind, LexemeType::WordHelping);
        assert_eq!(analysis.lexemes[2].normalized, "-");
    }

    #[test]
    fn test_admission_scenario() {
        // `^` is rejected as the first candidate, `;` absorbs the spaces
        // before it, the run of three spaces shrinks to one, and `#` stays.
        let analysis = LexemeAnalyzer::new().analyze("^One;   two#");
        assert_eq!(
            normalized_sequence(&analysis),
            vec!["One", ";", " ", "two", "#"]
        );
    }

    #[test]
    fn test_counter_consistency() {
        let analysis = LexemeAnalyzer::new().analyze("One; don't she'd\n\ni.");
        assert_eq!(
            analysis.word_like_count + analysis.other_character_count,
            analysis.lexemes.len()
        );
    }

    #[test]
    fn test_group_index_matches_group_keys() {
        use crate::analysis::grouping::group_keys;

        let analysis = LexemeAnalyzer::new().analyze("She'd say don't, I'd say can't.");

        for (index, lexeme) in analysis.lexemes.iter().enumerate() {
            if !lexeme.is_word_like() {
                continue;
            }
            for key in group_keys(&lexeme.normalized) {
                let bucket = analysis.lexemes_by_word_like.get(&key);
                assert!(
                    bucket.is_some_and(|b| b.contains_key(&index)),
                    "lexeme {index} ({}) missing under key {key}",
                    lexeme.normalized
                );
            }
        }

        for (key, bucket) in &analysis.lexemes_by_word_like {
            assert!(!bucket.is_empty(), "empty bucket under key {key}");
            for (index, lexeme) in bucket {
                assert!(
                    group_keys(&lexeme.normalized).contains(key),
                    "lexeme {index} indexed under foreign key {key}"
                );
            }
        }
    }

    #[test]
    fn test_no_double_space_no_triple_newline() {
        let analysis = LexemeAnalyzer::new().analyze("a  b\n\n\nc   \n  \n \n d");

        for pair in analysis.lexemes.windows(2) {
            assert!(!(pair[0].normalized == " " && pair[1].normalized == " "));
        }
        for triple in analysis.lexemes.windows(3) {
            assert!(!triple.iter().all(|l| l.normalized == "\n"));
        }
    }
}
