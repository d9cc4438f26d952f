//! Unicode-aware predicates over short text fragments
//!
//! These back the link heuristics. All of them operate on Unicode character
//! categories rather than ASCII ranges, and all of them are vacuously true for
//! the empty string.

/// Letters in the Unicode titlecase (`Lt`) category.
///
/// `char` has no titlecase query, and the category is small and stable.
const TITLECASE_LETTERS: &[(char, char)] = &[
    ('\u{01C5}', '\u{01C5}'),
    ('\u{01C8}', '\u{01C8}'),
    ('\u{01CB}', '\u{01CB}'),
    ('\u{01F2}', '\u{01F2}'),
    ('\u{1F88}', '\u{1F8F}'),
    ('\u{1F98}', '\u{1F9F}'),
    ('\u{1FA8}', '\u{1FAF}'),
    ('\u{1FBC}', '\u{1FBC}'),
    ('\u{1FCC}', '\u{1FCC}'),
    ('\u{1FFC}', '\u{1FFC}'),
];

/// Check if a character is a titlecase letter such as `ǅ`
pub fn is_titlecase(c: char) -> bool {
    TITLECASE_LETTERS.iter().any(|&(lo, hi)| (lo..=hi).contains(&c))
}

/// Check if a string consists solely of letters
pub fn is_alpha(s: &str) -> bool {
    s.chars().all(char::is_alphabetic)
}

/// Check if a string consists solely of numbers
pub fn is_numeric(s: &str) -> bool {
    s.chars().all(char::is_numeric)
}

/// Check if every string in `parts` consists solely of numbers
pub fn all_numeric(parts: &[&str]) -> bool {
    parts.iter().all(|part| is_numeric(part))
}

/// Check if a string is in Title Case: an upper or titlecase letter followed
/// only by lowercase letters.
///
/// "Raleigh" and "ǅemal" are titled; "RALEIGH", "raleigh" and "McDonald" are not.
pub fn is_titled(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        None => true,
        Some(first) => (first.is_uppercase() || is_titlecase(first)) && chars.all(char::is_lowercase),
    }
}

/// Split a string into its whitespace-delimited fields
pub fn split_space(s: &str) -> Vec<&str> {
    s.split_whitespace().collect()
}
