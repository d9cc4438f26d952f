//! Links carried by tag attributes
//!
//! Most link-bearing attributes are unambiguous: `href` and `src` always hold
//! a URL, as do a handful of tag-specific attributes such as `form action`.
//! `cite` is supposed to be a URL but is frequently free text, so it goes
//! through the text heuristics. `srcset` packs several URLs with descriptors.

use crate::classify::classify;
use crate::lexer::Attribute;
use crate::utils::split_space;

/// Attributes holding a URL on any tag
const UNIVERSAL_LINK_ATTRIBUTES: &[&str] = &["href", "src", "srcdoc", "data-src", "data-href"];

/// `(tag, attribute)` pairs that always hold a URL
const TAG_LINK_ATTRIBUTES: &[(&str, &str)] = &[
    ("applet", "code"),
    ("applet", "codebase"),
    ("command", "icon"),
    ("object", "data"),
    ("form", "action"),
    ("video", "poster"),
    ("input", "formaction"),
    ("button", "formaction"),
];

/// Tags whose `cite` attribute should hold a URL
const CITE_TAGS: &[&str] = &["blockquote", "del", "ins", "q"];

/// Links contributed by one attribute of `tag`.
///
/// `tag` must already be lowercased. The attribute key is compared case
/// insensitively; values are returned exactly as written.
pub fn attribute_links<'a>(tag: &str, attr: &'a Attribute) -> Vec<&'a str> {
    let key = attr.key.to_lowercase();

    if UNIVERSAL_LINK_ATTRIBUTES.contains(&key.as_str()) {
        return vec![attr.value.as_str()];
    }

    // outside the default namespace the meaning of an attribute is unknown
    if attr.has_namespace() {
        return Vec::new();
    }

    if TAG_LINK_ATTRIBUTES.iter().any(|&(t, k)| t == tag && k == key) {
        return vec![attr.value.as_str()];
    }

    if key == "cite" && CITE_TAGS.contains(&tag) {
        return cite_link(&attr.value).into_iter().collect();
    }

    if key == "srcset" && tag == "img" {
        return srcset_links(&attr.value);
    }

    Vec::new()
}

/// A `cite` value is only a link if it is a single word that looks like one
fn cite_link(value: &str) -> Option<&str> {
    let words = split_space(value);
    match words[..] {
        [word] => classify(word),
        _ => None,
    }
}

/// The URL part of each `url [descriptor]` candidate in a `srcset`
fn srcset_links(value: &str) -> Vec<&str> {
    value
        .split(',')
        .filter_map(|candidate| candidate.split_whitespace().next())
        .collect()
}
