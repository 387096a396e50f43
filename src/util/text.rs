// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text helpers: normalization, word boundaries, and postcode fragments.
//!
//! Word-boundary matching is done by comparing whitespace tokens rather than
//! by building a regex from user input. A query never has to be escaped, and
//! "chester" vs "godmanchester" is decided by token equality, which is easy to
//! test on its own.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Lowercase and collapse runs of whitespace to a single space.
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sort key for "locale-aware" name ordering.
///
/// NFD-decompose, drop combining marks, lowercase. "Éclair Homes" sorts next
/// to "Eclipse Lettings" instead of after every ASCII name.
#[cfg(feature = "unicode-normalization")]
pub fn collation_key(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Without unicode-normalization the key is just the lowercased value.
#[cfg(not(feature = "unicode-normalization"))]
pub fn collation_key(value: &str) -> String {
    value.to_lowercase()
}

/// Check if a character is a combining mark (diacritic).
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Trimmed value, or `None` when nothing is left.
#[inline]
pub fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// First whitespace-separated token, uppercased: "sw1a 1aa" → "SW1A".
pub fn first_token_upper(value: &str) -> Option<String> {
    value.split_whitespace().next().map(str::to_uppercase)
}

/// Length in characters, not bytes. Tier gates count what the user typed.
#[inline]
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// True when `needle` occurs in `haystack` as a run of whole words.
///
/// Both sides are split on whitespace and compared token by token, so
/// `contains_word("manchester city centre", "manchester")` holds while
/// `contains_word("godmanchester", "chester")` does not.
pub fn contains_word(haystack: &str, needle: &str) -> bool {
    let needle: Vec<&str> = needle.split_whitespace().collect();
    if needle.is_empty() {
        return false;
    }
    let haystack: Vec<&str> = haystack.split_whitespace().collect();
    haystack
        .windows(needle.len())
        .any(|window| window == needle.as_slice())
}

/// True when `needle` starts at the beginning of `haystack` or right after a
/// whitespace character. The end of the match is unconstrained.
pub fn starts_at_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    let mut at_boundary = true;
    for (offset, c) in haystack.char_indices() {
        if at_boundary && haystack[offset..].starts_with(needle) {
            return true;
        }
        at_boundary = c.is_whitespace();
    }
    false
}

/// Capitalize the first letter of every word: "west end" → "West End".
pub fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Leading letters of an outcode, uppercased: "SW1A" → "SW", "m14" → "M".
pub fn alpha_prefix(outcode: &str) -> String {
    outcode
        .trim()
        .chars()
        .take_while(|c| c.is_alphabetic())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Whether the value mixes letters and digits, i.e. looks like a postcode.
pub fn has_letter_and_digit(value: &str) -> bool {
    value.chars().any(char::is_alphabetic) && value.chars().any(|c| c.is_ascii_digit())
}
