//! Deduplicated sets of discovered links

use crate::keys::OrderedKeys;
use crate::render::{Render, WriteError};
use std::collections::HashSet;
use std::io::Write;

/// Pseudo-schemes that run script instead of navigating; never reported
const DISALLOWED_SCHEMES: &[&str] = &["javascript:"];

/// A set of unique links.
///
/// Values are stored exactly as given. Empty values, the bare fragment `#`
/// and `javascript:` URLs are silently dropped on insertion.
#[derive(Debug, Default, Clone)]
pub struct LinkSet {
    links: HashSet<String>,
}

impl LinkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a value would be kept by [`LinkSet::add`]
    pub fn accepts(link: &str) -> bool {
        if link.is_empty() || link == "#" {
            return false;
        }
        let lower = link.to_lowercase();
        !DISALLOWED_SCHEMES.iter().any(|scheme| lower.starts_with(scheme))
    }

    /// Add a link, returning `true` if it was kept and not already present
    pub fn add(&mut self, link: &str) -> bool {
        if !Self::accepts(link) || self.links.contains(link) {
            return false;
        }
        self.links.insert(link.to_string())
    }

    pub fn contains(&self, link: &str) -> bool {
        self.links.contains(link)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// All links in ascending order
    pub fn sorted(&self) -> Vec<&str> {
        self.links.iter().map(String::as_str).collect::<OrderedKeys>().sorted()
    }
}

impl Render for LinkSet {
    fn render<W: Write>(&self, out: &mut W) -> Result<(), WriteError> {
        self.links.iter().map(String::as_str).collect::<OrderedKeys>().render(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_links() {
        let mut links = LinkSet::new();
        assert!(!links.add(""));
        assert!(!links.add("#"));
        assert!(!links.add("javascript:void(0)"));
        assert!(!links.add("JavaScript:alert(1)"));
        assert!(links.is_empty());
    }

    #[test]
    fn test_keeps_fragments_and_near_misses() {
        let mut links = LinkSet::new();
        assert!(links.add("#top"));
        assert!(links.add("javascript.html"));
        assert!(links.add(" javascript:x"));
        assert_eq!(links.len(), 3);
    }

    #[test]
    fn test_deduplicates_exact_values() {
        let mut links = LinkSet::new();
        assert!(links.add("/a"));
        assert!(!links.add("/a"));
        assert!(links.add("/A"));
        assert_eq!(links.sorted(), vec!["/A", "/a"]);
    }

    #[test]
    fn test_render_sorted() {
        let mut links = LinkSet::new();
        for link in ["http://b.test/", "/x", "http://a.test/"] {
            links.add(link);
        }
        let mut out = Vec::new();
        links.render(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "/x\nhttp://a.test/\nhttp://b.test/\n");
    }
}
