//! Group key derivation for the reverse word index.
//!
//! Words like `Item's`/`I'd`/`She'd`/`He's` cannot be safely uncontracted:
//! each has several valid expansions (possessive, "is", "has", "would"). They
//! are instead indexed under two keys, the bare stem and the full contracted
//! form, so the user can guess either and reveal the same occurrence.

/// Derive the grouping keys for a normalized word, lower-cased.
///
/// Returns two keys (stem without the trailing two characters, plus the full
/// word) when the word ends in `'s` or `'d`; otherwise one key.
pub fn group_keys(normalized: &str) -> Vec<String> {
    let key = normalized.to_lowercase();

    if key.ends_with("'s") || key.ends_with("'d") {
        let stem = key[..key.len() - 2].to_string();
        vec![stem, key]
    } else {
        vec![key]
    }
}
