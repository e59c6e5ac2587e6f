//! Utility functions for cookbook-core

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Fold text for comparison: lowercase, then NFD-decompose and drop combining
/// marks so accented and unaccented forms compare equal ("café" == "cafe").
pub fn fold(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Case- and diacritic-insensitive substring check
pub fn contains_fold(haystack: &str, needle: &str) -> bool {
    fold(haystack).contains(&fold(needle))
}

/// Canonical form for ingredient names as stored in the `ingredients` table
pub fn normalize_ingredient_name(name: &str) -> String {
    name.trim().to_lowercase()
}
