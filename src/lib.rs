//! # Lexiguess
//!
//! A lexeme analysis engine for word-guessing games.
//!
//! ## Features
//!
//! - Single-pass tokenization of raw human-written text into typed,
//!   displayable lexemes
//! - Typographic normalization (quote/dash substitution, capitalization sync)
//! - Contraction expansion (`don't` → `do not`) with ambiguous forms
//!   (`she's`, `he'd`) kept guessable as both stem and full form
//! - Whitespace and newline collapsing with undo-capable admission rules
//! - A reverse index from guessable word keys to lexeme occurrences
//! - A reveal/score game session layer and a plain-text renderer

pub mod analysis;
pub mod cli;
pub mod error;
pub mod game;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
