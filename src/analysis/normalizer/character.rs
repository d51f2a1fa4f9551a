//! Character normalization and classification.
//!
//! Maps a single input character to its canonical form (lower-casing plus a
//! fixed substitution table for typographic glyphs) and classifies characters
//! as word-forming or not. Apostrophe and hyphen are "word-helping": they
//! bind to adjacent letters so compounds (`re-generate`) and contractions
//! (`don't`) stay one primitive unit.

use ahash::AHashMap;

/// Fixed substitutions applied after lower-casing: typographic glyphs are
/// replaced with their plain ASCII counterparts.
const CHARACTER_SUBSTITUTIONS: &[(char, char)] = &[('—', '-'), ('’', '\''), ('`', '\'')];

/// Characters that are part of a word when adjacent to letters.
const WORD_HELPING_CHARACTERS: &[char] = &['\'', '-'];

/// Normalizes single characters via lower-casing and a fixed substitution
/// table.
#[derive(Clone, Debug)]
pub struct CharacterNormalizer {
    substitutions: AHashMap<char, char>,
}

impl CharacterNormalizer {
    /// Create a new character normalizer with the default substitution table.
    pub fn new() -> Self {
        CharacterNormalizer {
            substitutions: CHARACTER_SUBSTITUTIONS.iter().copied().collect(),
        }
    }

    /// Normalize a single character: lower-case it, then substitute it via
    /// the fixed table. Unmapped characters pass through lower-cased.
    pub fn normalize(&self, character: char) -> char {
        let lower_cased = character
            .to_lowercase()
            .next()
            // to_lowercase always yields at least one character
            .unwrap_or(character);

        self.substitutions
            .get(&lower_cased)
            .copied()
            .unwrap_or(lower_cased)
    }
}

impl Default for CharacterNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// True iff the (normalized) character can form part of a word: an ASCII
/// letter, an apostrophe, or a hyphen.
pub fn is_word_character(character: char) -> bool {
    is_letter(character) || is_word_helping_character(character)
}

/// True iff the character is a single A-Z/a-z letter.
pub fn is_letter(character: char) -> bool {
    character.is_ascii_alphabetic()
}

/// True iff the character is an apostrophe or a hyphen.
pub fn is_word_helping_character(character: char) -> bool {
    WORD_HELPING_CHARACTERS.contains(&character)
}
