//! Tag to attribute-name dictionary

use crate::keys::OrderedKeys;
use crate::render::{Render, ReportWriter, WriteError};
use std::collections::{HashMap, HashSet};
use std::io::Write;

/// Every tag seen, with the union of attribute names used on any instance of it
#[derive(Debug, Default, Clone)]
pub struct TagDictionary {
    tags: HashMap<String, HashSet<String>>,
}

impl TagDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one sighting of `tag` carrying `attributes`.
    ///
    /// The tag is recorded even when it has no attributes.
    pub fn add<I, S>(&mut self, tag: &str, attributes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags
            .entry(tag.to_string())
            .or_default()
            .extend(attributes.into_iter().map(Into::into));
    }

    pub fn contains_tag(&self, tag: &str) -> bool {
        self.tags.contains_key(tag)
    }

    /// Attribute names recorded for `tag`, in ascending order
    pub fn attributes(&self, tag: &str) -> Option<Vec<&str>> {
        self.tags
            .get(tag)
            .map(|attrs| attrs.iter().map(String::as_str).collect::<OrderedKeys>().sorted())
    }

    /// Number of distinct tags
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// All tags in ascending order, each with its attributes in ascending order
    pub fn sorted(&self) -> Vec<(&str, Vec<&str>)> {
        let mut keys = OrderedKeys::with_capacity(self.tags.len());
        for tag in self.tags.keys() {
            keys.add(tag);
        }
        keys.sorted()
            .into_iter()
            .map(|tag| (tag, self.attributes(tag).unwrap_or_default()))
            .collect()
    }
}

impl Render for TagDictionary {
    fn render<W: Write>(&self, out: &mut W) -> Result<(), WriteError> {
        let mut writer = ReportWriter::new(out);
        for (tag, attributes) in self.sorted() {
            writer.line(tag)?;
            for attribute in attributes {
                writer.indented_line(attribute)?;
            }
        }
        Ok(())
    }
}
