//! Plain-text rendering of an analysis.
//!
//! Walks the lexeme sequence in index order: word-like lexemes render either
//! their normalized text or an underscore mask depending on the revealed set,
//! newline special characters become line breaks, and every other
//! `WordHelping`/`SpecialCharacter` lexeme renders its normalized text
//! verbatim.

use std::collections::BTreeSet;

use crate::analysis::lexeme::{Lexeme, LexemeAnalysis};

/// Render the text with unrevealed words masked by underscores.
///
/// With `show_first_letters` set, the mask leaks each word's first character.
pub fn render_masked(
    analysis: &LexemeAnalysis,
    revealed: &BTreeSet<usize>,
    show_first_letters: bool,
) -> String {
    let mut output = String::new();

    for (index, lexeme) in analysis.lexemes.iter().enumerate() {
        if lexeme.is_other_character() || revealed.contains(&index) {
            output.push_str(&lexeme.normalized);
        } else {
            mask_into(&mut output, lexeme, show_first_letters);
        }
    }

    output
}

/// Render the fully revealed text: every lexeme's normalized form in index
/// order, i.e. the canonicalized rendering of the input with the whitespace
/// and newline rules enforced.
pub fn render_plain(analysis: &LexemeAnalysis) -> String {
    analysis
        .lexemes
        .iter()
        .map(|lexeme| lexeme.normalized.as_str())
        .collect()
}

fn mask_into(output: &mut String, lexeme: &Lexeme, show_first_letters: bool) {
    let mut characters = lexeme.normalized.chars();

    if show_first_letters {
        if let Some(first) = characters.next() {
            output.push(first);
        }
    }

    for _ in characters {
        output.push('_');
    }
}
