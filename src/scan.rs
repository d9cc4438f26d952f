//! Single pass over a token stream, collecting tags and links
//!
//! The scanner never builds a tree. Each token is handled on its own, so any
//! number of documents can be concatenated into one stream.

use crate::attr_links::attribute_links;
use crate::classify::classify;
use crate::dict::TagDictionary;
use crate::lexer::{Html5gumLexer, LexError, Lexer, Tag, Token};
use crate::links::LinkSet;
use std::io::Read;

/// Everything collected from one scan
#[derive(Debug, Default, Clone)]
pub struct ScanReport {
    /// Tags and the attribute names used on them
    pub tags: TagDictionary,
    /// Links found in link-bearing attributes
    pub attribute_links: LinkSet,
    /// Probable links found in text content
    pub text_links: LinkSet,
}

impl ScanReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one token into the report
    pub fn process(&mut self, token: Token) {
        match token {
            Token::Text(text) => self.process_text(&text),
            Token::StartTag(tag) | Token::SelfClosingTag(tag) => self.process_tag(&tag),
            Token::EndOfStream | Token::Other => {}
        }
    }

    fn process_text(&mut self, text: &str) {
        for word in text.split_whitespace() {
            if let Some(link) = classify(word)
                && self.text_links.add(link)
            {
                log::trace!("text link: {link}");
            }
        }
    }

    fn process_tag(&mut self, tag: &Tag) {
        let name = tag.name.to_lowercase();
        let mut attribute_names = Vec::with_capacity(tag.attributes.len());

        for attr in &tag.attributes {
            attribute_names.push(attr.display_name());
            for link in attribute_links(&name, attr) {
                self.attribute_links.add(link);
            }
        }

        self.tags.add(&name, attribute_names);
    }
}

/// Drain `lexer` into a [`ScanReport`].
///
/// Stops at the first [`Token::EndOfStream`]. Any lexer error aborts the
/// whole scan and nothing collected so far is returned.
pub fn scan<L: Lexer>(lexer: &mut L) -> Result<ScanReport, LexError> {
    let mut report = ScanReport::new();
    let mut tokens = 0usize;

    loop {
        let token = lexer.next_token().inspect_err(|err| {
            log::debug!("scan aborted after {tokens} tokens: {err}");
        })?;
        if token == Token::EndOfStream {
            break;
        }
        tokens += 1;
        report.process(token);
    }

    log::debug!(
        "scanned {} tokens: {} tags, {} attribute links, {} text links",
        tokens,
        report.tags.len(),
        report.attribute_links.len(),
        report.text_links.len()
    );
    Ok(report)
}

/// Tokenize and scan everything readable from `reader`
pub fn scan_reader<R: Read>(reader: R) -> Result<ScanReport, LexError> {
    scan(&mut Html5gumLexer::new(reader))
}

/// Tokenize and scan an in-memory document
pub fn scan_str(html: &str) -> Result<ScanReport, LexError> {
    scan_reader(html.as_bytes())
}
