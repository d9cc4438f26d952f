//! Heuristic URL detection for bare words in text content
//!
//! Text nodes are split on whitespace and every resulting word is run through
//! [`classify`]. A word is a probable link when it looks like an IPv6 literal,
//! has a dot inside a word that is not an acronym, or contains a path
//! separator that is not a fraction, date or list of place names.
//!
//! The rules are English-centric and deliberately approximate: the goal is to
//! surface links for a human to review, not to validate them.

use crate::utils::{all_numeric, is_alpha, is_numeric, is_titled};
use regex::Regex;
use std::sync::LazyLock;

/// A dot with at least one character before it and two after it, all within one word
static DOT_IN_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^.]+\.[^.]{2,}").unwrap());

/// The start of something that could be an IPv6 address literal
static IPV6_LITERAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9a-zA-Z:]{3,}").unwrap());

/// Characters stripped from the start of a word before classification
const OPENING_PUNCTUATION: &str = "(‛“`—-\"'";

/// Characters stripped from the end of a word before classification
const CLOSING_PUNCTUATION: &str = "’”.!?,;:)`—-\"'";

/// Outcome of one detector in the classification pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The word is a link; stop here
    Accept,
    /// The word is definitely not a link; stop here
    Reject,
    /// This detector has no opinion; try the next one
    Undecided,
}

/// A named detector, run in table order until one decides
struct Detector {
    name: &'static str,
    detect: fn(&str) -> Verdict,
}

const DETECTORS: &[Detector] = &[
    Detector {
        name: "ipv6-literal",
        detect: detect_ipv6_literal,
    },
    Detector {
        name: "dot-in-word",
        detect: detect_dot_in_word,
    },
    Detector {
        name: "path-separator",
        detect: detect_path_separator,
    },
];

/// Decide whether a single whitespace-free word is probably a URL.
///
/// Returns the word with surrounding punctuation removed, or `None` when the
/// word does not look like a link.
///
/// ```
/// use htmlrep_lib::classify::classify;
///
/// assert_eq!(classify("(example.com/path)."), Some("example.com/path"));
/// assert_eq!(classify("“example.com/path”."), Some("example.com/path"));
/// assert_eq!(classify("Raleigh/Durham"), None);
/// ```
pub fn classify(word: &str) -> Option<&str> {
    let word = trim_opening(word)?;
    let word = trim_closing(word)?;

    for detector in DETECTORS {
        match (detector.detect)(word) {
            Verdict::Accept => {
                log::trace!("{word:?} accepted by {}", detector.name);
                return Some(word);
            }
            Verdict::Reject => {
                log::trace!("{word:?} rejected by {}", detector.name);
                return None;
            }
            Verdict::Undecided => {}
        }
    }

    None
}

/// Strip leading opening punctuation, or `None` if nothing is left
pub fn trim_opening(word: &str) -> Option<&str> {
    non_empty(word.trim_start_matches(|c| OPENING_PUNCTUATION.contains(c)))
}

/// Strip trailing closing punctuation, or `None` if nothing is left.
///
/// This runs before the IPv6 check, so a literal ending in `::` loses its
/// trailing colons. Bare loopback-style literals are not worth reporting.
pub fn trim_closing(word: &str) -> Option<&str> {
    non_empty(word.trim_end_matches(|c| CLOSING_PUNCTUATION.contains(c)))
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}

/// Accept anything with two or more colons that starts like an IPv6 literal
pub fn detect_ipv6_literal(word: &str) -> Verdict {
    if word.matches(':').count() > 1 && IPV6_LITERAL.is_match(word) {
        Verdict::Accept
    } else {
        Verdict::Undecided
    }
}

/// Accept dotted words that are not acronyms, and dotted quads.
///
/// A word is presumed to be an acronym ("U.S.A") until one of its components
/// is a single character or made only of letters. All-numeric words are only
/// accepted with exactly four components so that decimals fall through.
pub fn detect_dot_in_word(word: &str) -> Verdict {
    if !DOT_IN_WORD.is_match(word) {
        return Verdict::Undecided;
    }

    let components: Vec<&str> = word.split('.').collect();
    let looks_acronym = !components.iter().any(|c| c.chars().count() == 1 || is_alpha(c));
    let numeric = components.iter().all(|c| is_numeric(c));

    if !looks_acronym || (numeric && components.len() == 4) {
        Verdict::Accept
    } else {
        Verdict::Undecided
    }
}

/// Accept words containing `/`, except "and/or", city pairs such as
/// "Raleigh/Durham", fractions and dates.
pub fn detect_path_separator(word: &str) -> Verdict {
    if !word.contains('/') || word.to_lowercase() == "and/or" {
        return Verdict::Undecided;
    }
    if word == "/" {
        return Verdict::Accept;
    }

    let components: Vec<&str> = word.split('/').collect();
    let city_pair = components.iter().all(|c| is_titled(c));
    let fraction_or_date = matches!(components.len(), 2 | 3) && all_numeric(&components);

    if city_pair || fraction_or_date {
        Verdict::Reject
    } else {
        Verdict::Accept
    }
}
