//! Tags and links report for streams of HTML documents.
//!
//! The input is tokenized, never parsed into a tree, so any number of
//! documents can be concatenated. Three reports come out of a scan:
//!
//! - every tag used, with the attribute names used on it
//! - links found in attributes known to hold links
//! - probable links found in text content, picked out by heuristics
//!
//! ```
//! use htmlrep_lib::scan_str;
//!
//! let report = scan_str(r#"<a href="/about">see example.com/team</a>"#).unwrap();
//! assert_eq!(report.attribute_links.sorted(), vec!["/about"]);
//! assert_eq!(report.text_links.sorted(), vec!["example.com/team"]);
//! ```

pub mod attr_links;
pub mod classify;
pub mod config;
pub mod dict;
pub mod exit_codes;
pub mod keys;
pub mod lexer;
pub mod links;
pub mod render;
pub mod report;
pub mod scan;
pub mod utils;

pub use crate::classify::classify;
pub use crate::dict::TagDictionary;
pub use crate::lexer::{Attribute, Html5gumLexer, LexError, Lexer, Tag, Token};
pub use crate::links::LinkSet;
pub use crate::render::{Render, WriteError};
pub use crate::report::{ReportSelection, write_reports};
pub use crate::scan::{ScanReport, scan, scan_reader, scan_str};
