//! Game layer built on top of the analysis result.
//!
//! A [`GuessSession`] tracks which word-like lexemes the player has revealed,
//! by typed guess or by index (the click equivalent), and keeps the running
//! score against `word_like_count`. The [`render`] module turns an analysis
//! plus a revealed set into plain text.

pub mod render;
pub mod session;

// Re-export commonly used types
pub use render::*;
pub use session::*;
