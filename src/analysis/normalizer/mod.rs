//! Normalizers that canonicalize characters and words.
//!
//! Normalization runs in two stages: every scanned character goes through the
//! [`CharacterNormalizer`] first, and each accumulated word goes through the
//! [`WordNormalizer`] once its boundary is reached.

pub mod character;
pub mod word;

// Re-export all normalizers for convenient access
pub use character::CharacterNormalizer;
pub use character::{is_letter, is_word_character, is_word_helping_character};
pub use word::{WordNormalizer, sync_case};
