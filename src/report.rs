//! Choosing and composing the three reports

use crate::render::{Render, ReportWriter, WriteError};
use crate::scan::ScanReport;
use std::io::Write;

/// Which of the three reports to print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSelection {
    pub tags: bool,
    pub attribute_links: bool,
    pub text_links: bool,
}

impl Default for ReportSelection {
    fn default() -> Self {
        Self::all()
    }
}

impl ReportSelection {
    pub const fn all() -> Self {
        Self {
            tags: true,
            attribute_links: true,
            text_links: true,
        }
    }

    /// Resolve the "only show ..." command line flags.
    ///
    /// `only_tags` and `only_links` pick between the tags report and the link
    /// reports; `only_text_links` and `only_attribute_links` narrow the link
    /// reports further. Asking for only both halves of a pair is read as
    /// asking for both, with a warning.
    pub fn from_flags(only_tags: bool, only_links: bool, only_text_links: bool, only_attribute_links: bool) -> Self {
        let (mut only_tags, mut only_links) = (only_tags, only_links);
        if only_tags && only_links {
            log::warn!("You asked me to only show both.");
            only_tags = false;
            only_links = false;
        }

        let (mut only_text_links, mut only_attribute_links) = (only_text_links, only_attribute_links);
        if only_text_links && only_attribute_links {
            log::warn!("You asked me to only show both kinds of links.");
            only_text_links = false;
            only_attribute_links = false;
        }

        let links = !only_tags;
        Self {
            tags: !only_links,
            attribute_links: links && !only_text_links,
            text_links: links && !only_attribute_links,
        }
    }

    /// Reports selected by both `self` and `other`
    pub fn intersect(self, other: Self) -> Self {
        Self {
            tags: self.tags && other.tags,
            attribute_links: self.attribute_links && other.attribute_links,
            text_links: self.text_links && other.text_links,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.tags || self.attribute_links || self.text_links)
    }
}

/// Write the selected reports in order (tags, attribute links, text links),
/// separated by blank lines.
pub fn write_reports<W: Write>(report: &ScanReport, selection: ReportSelection, out: &mut W) -> Result<(), WriteError> {
    let mut first = true;
    let mut separate = |out: &mut W| -> Result<(), WriteError> {
        if !std::mem::replace(&mut first, false) {
            ReportWriter::new(out).blank_line()?;
        }
        Ok(())
    };

    if selection.tags {
        separate(out)?;
        report.tags.render(out)?;
    }
    if selection.attribute_links {
        separate(out)?;
        report.attribute_links.render(out)?;
    }
    if selection.text_links {
        separate(out)?;
        report.text_links.render(out)?;
    }
    Ok(())
}
