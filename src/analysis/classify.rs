//! Lexeme classification from the normalized form.

use crate::analysis::lexeme::LexemeType;
use crate::analysis::normalizer::{is_letter, is_word_helping_character};

/// Assign a lexeme its type from its normalized form.
///
/// Anything longer than one character is a `Word`. A single character is
/// `WordHelping` (apostrophe/hyphen), `Letter` (A-Z/a-z), or
/// `SpecialCharacter` (everything else, including space and newline).
pub fn classify(normalized: &str) -> LexemeType {
    let mut characters = normalized.chars();

    match (characters.next(), characters.next()) {
        (Some(only), None) => {
            if is_word_helping_character(only) {
                LexemeType::WordHelping
            } else if is_letter(only) {
                LexemeType::Letter
            } else {
                LexemeType::SpecialCharacter
            }
        }
        _ => LexemeType::Word,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_character_is_word() {
        assert_eq!(classify("two"), LexemeType::Word);
        assert_eq!(classify("she'd"), LexemeType::Word);
        assert_eq!(classify("re-g"), LexemeType::Word);
    }

    #[test]
    fn test_single_letter() {
        assert_eq!(classify("I"), LexemeType::Letter);
        assert_eq!(classify("a"), LexemeType::Letter);
    }

    #[test]
    fn test_word_helping_characters() {
        assert_eq!(classify("'"), LexemeType::WordHelping);
        assert_eq!(classify("-"), LexemeType::WordHelping);
    }

    #[test]
    fn test_special_characters() {
        assert_eq!(classify(" "), LexemeType::SpecialCharacter);
        assert_eq!(classify("\n"), LexemeType::SpecialCharacter);
        assert_eq!(classify("#"), LexemeType::SpecialCharacter);
        assert_eq!(classify("."), LexemeType::SpecialCharacter);
    }
}
