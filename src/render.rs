//! Line-oriented rendering of reports

use std::io::{self, Write};

/// Errors that can occur while writing a report
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// The output sink rejected a write or accepted only part of it
    #[error("Failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// Something that can be written out as a plain-text report
pub trait Render {
    /// Write the report to `out`, one entry per line
    fn render<W: Write>(&self, out: &mut W) -> Result<(), WriteError>;
}

/// Writes whole lines, optionally indented by one tab.
///
/// Every write goes through `write_all`, so a short write surfaces as an
/// error instead of silently truncating the report.
pub struct ReportWriter<'a, W: Write> {
    out: &'a mut W,
}

impl<'a, W: Write> ReportWriter<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        Self { out }
    }

    /// Write `s` on its own line
    pub fn line(&mut self, s: &str) -> Result<(), WriteError> {
        self.out.write_all(s.as_bytes())?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    /// Write `s` on its own line, indented with one tab
    pub fn indented_line(&mut self, s: &str) -> Result<(), WriteError> {
        self.out.write_all(b"\t")?;
        self.line(s)
    }

    /// Write an empty line
    pub fn blank_line(&mut self) -> Result<(), WriteError> {
        self.line("")
    }
}
