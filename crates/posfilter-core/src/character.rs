// Character utilities: simple case mapping and diacritic stripping

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

// ---------------------------------------------------------------------------
// Simple case conversion
//
// The standard library's to_lowercase / to_uppercase produce iterators
// because some characters map to multiple characters. For the "simple"
// one-to-one mapping we only take the first character.
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
pub fn simple_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Convert a character to its simple uppercase equivalent.
pub fn simple_upper(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

/// Check whether a character is an uppercase letter.
pub fn is_upper(c: char) -> bool {
    c != simple_lower(c)
}

/// Compare two strings for equality, ignoring character case.
///
/// Comparison is per character with the simple (one-to-one) mapping, so
/// strings of different character counts are never equal.
pub fn equals_ignore_case(a: &str, b: &str) -> bool {
    let mut left = a.chars();
    let mut right = b.chars();
    loop {
        match (left.next(), right.next()) {
            (None, None) => return true,
            (Some(ca), Some(cb)) if simple_lower(ca) == simple_lower(cb) => {}
            _ => return false,
        }
    }
}

/// Upper-case the first character of a word, leaving the rest untouched.
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.push(simple_upper(first));
            out.extend(chars);
            out
        }
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Diacritics
// ---------------------------------------------------------------------------

/// Strip diacritics from a string.
///
/// The text is decomposed canonically (NFD) and every combining mark is
/// dropped, so `"cäsa"` becomes `"casa"` and `"Ñandú"` becomes `"Nandu"`.
/// Letters without a decomposition (`ø`, `ß`) are kept as they are.
pub fn remove_diacritics(s: &str) -> String {
    s.nfd().filter(|&c| !is_combining_mark(c)).collect()
}

/// Check whether two words differ at most in diacritics and letter case.
pub fn equal_without_diacritics(a: &str, b: &str) -> bool {
    equals_ignore_case(&remove_diacritics(a), &remove_diacritics(b))
}
