//! Text analysis module for lexiguess.
//!
//! This module converts raw text into an ordered sequence of typed lexemes
//! plus a reverse index that groups lexemes by a guessable word key. The
//! pipeline is: character normalization → word accumulation → word
//! normalization → uncontraction/splitting → collapse-then-admit storage.

pub mod analyzer;
pub mod classify;
pub mod grouping;
pub mod lexeme;
pub mod normalizer;
pub mod store;
pub mod uncontract;

// Re-export commonly used types
pub use analyzer::*;
pub use classify::*;
pub use grouping::*;
pub use lexeme::*;
pub use normalizer::*;
pub use store::*;
pub use uncontract::*;
