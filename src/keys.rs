//! Deterministic ordering of collected keys

use crate::render::{Render, ReportWriter, WriteError};
use std::io::Write;

/// Collects string keys and hands them back sorted and deduplicated.
///
/// Hash-based containers iterate in an arbitrary order; reports go through
/// this type so the same input always renders the same output.
#[derive(Debug, Default, Clone)]
pub struct OrderedKeys<'a> {
    keys: Vec<&'a str>,
}

impl<'a> OrderedKeys<'a> {
    /// Create an empty key set with room for `capacity` keys
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
        }
    }

    pub fn add(&mut self, key: &'a str) {
        self.keys.push(key);
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Consume the set, returning the unique keys in ascending byte order
    pub fn sorted(mut self) -> Vec<&'a str> {
        self.keys.sort_unstable();
        self.keys.dedup();
        self.keys
    }
}

impl<'a> FromIterator<&'a str> for OrderedKeys<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

impl Render for OrderedKeys<'_> {
    fn render<W: Write>(&self, out: &mut W) -> Result<(), WriteError> {
        let mut writer = ReportWriter::new(out);
        for key in self.clone().sorted() {
            writer.line(key)?;
        }
        Ok(())
    }
}
