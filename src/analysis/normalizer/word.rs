//! Word normalization: substitution table plus capitalization sync.
//!
//! Applied once per accumulated word at its boundary. This is the only place
//! capitalization is synchronized back onto a normalized form.

use ahash::AHashMap;

/// Fixed word substitutions applied to the per-character-normalized form.
const WORD_SUBSTITUTIONS: &[(&str, &str)] = &[("i", "I")];

/// Normalizes whole words against a fixed substitution table, restoring the
/// user's leading capital afterwards.
#[derive(Clone, Debug)]
pub struct WordNormalizer {
    substitutions: AHashMap<String, String>,
}

impl WordNormalizer {
    /// Create a new word normalizer with the default substitution table.
    pub fn new() -> Self {
        WordNormalizer {
            substitutions: WORD_SUBSTITUTIONS
                .iter()
                .map(|&(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        }
    }

    /// Normalize an accumulated word.
    ///
    /// Looks the per-character-normalized form up in the substitution table,
    /// then case-syncs the result against the original word.
    pub fn normalize(&self, original: &str, normalized: &str) -> String {
        let converted = self
            .substitutions
            .get(normalized)
            .map(String::as_str)
            .unwrap_or(normalized);

        sync_case(original, converted)
    }
}

impl Default for WordNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Propagate the user's capitalization intent onto a normalized form.
///
/// If the normalized form's first character differs from the original's but
/// matches it case-insensitively, upper-case the normalized form's first
/// character.
pub fn sync_case(original: &str, normalized: &str) -> String {
    let (Some(original_first), Some(normalized_first)) =
        (original.chars().next(), normalized.chars().next())
    else {
        return normalized.to_string();
    };

    if normalized_first != original_first
        && normalized_first.to_ascii_uppercase() == original_first
    {
        let mut synced = String::with_capacity(normalized.len());
        synced.push(normalized_first.to_ascii_uppercase());
        synced.extend(normalized.chars().skip(1));
        synced
    } else {
        normalized.to_string()
    }
}
