//! Pull-based HTML token stream
//!
//! The scanner only needs a handful of token kinds, so the lexer surface is
//! reduced to [`Token`] and the [`Lexer`] trait. [`Html5gumLexer`] provides
//! it on top of the WHATWG tokenizer from `html5gum`, reading any
//! [`std::io::Read`] without ever building a tree.

use html5gum::{DefaultEmitter, IoReader, Tokenizer};
use std::io::{self, Read};

/// Attribute name prefixes that carry a namespace on foreign (SVG/MathML) content
const FOREIGN_PREFIXES: &[&str] = &["xlink", "xmlns", "xml"];

/// One attribute on a tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub namespace: Option<String>,
    pub key: String,
    pub value: String,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            namespace: None,
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn namespaced(namespace: impl Into<String>, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            key: key.into(),
            value: value.into(),
        }
    }

    /// Split a raw attribute name like `xlink:href` into namespace and key.
    ///
    /// Only the prefixes HTML defines for foreign attributes are split; any
    /// other colon is part of the key.
    pub fn from_raw_name(name: &str, value: impl Into<String>) -> Self {
        if let Some((prefix, key)) = name.split_once(':')
            && !key.is_empty()
            && FOREIGN_PREFIXES.contains(&prefix.to_ascii_lowercase().as_str())
        {
            return Self::namespaced(prefix, key, value);
        }
        Self::new(name, value)
    }

    /// Whether the attribute lives outside the default namespace
    pub fn has_namespace(&self) -> bool {
        self.namespace.as_deref().is_some_and(|ns| !ns.is_empty())
    }

    /// Name as shown in the tags report: `ns:key` or `key`, lowercased
    pub fn display_name(&self) -> String {
        match self.namespace.as_deref() {
            Some(ns) if !ns.is_empty() => format!("{}:{}", ns, self.key).to_lowercase(),
            _ => self.key.to_lowercase(),
        }
    }
}

/// A start or self-closing tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub attributes: Vec<Attribute>,
}

impl Tag {
    pub fn new(name: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        Self {
            name: name.into(),
            attributes,
        }
    }
}

/// The token kinds the scanner distinguishes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Input exhausted cleanly
    EndOfStream,
    /// A run of character data, entities already decoded
    Text(String),
    StartTag(Tag),
    SelfClosingTag(Tag),
    /// End tags, comments, doctypes and recoverable parse errors
    Other,
}

/// Errors a lexer can report other than clean end of input
#[derive(Debug, thiserror::Error)]
pub enum LexError {
    /// Reading the underlying input failed
    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// A source of [`Token`]s, pulled one at a time
pub trait Lexer {
    /// Produce the next token. After [`Token::EndOfStream`] or an error the
    /// lexer should not be polled again.
    fn next_token(&mut self) -> Result<Token, LexError>;
}

type TokenStream<'a> = Box<dyn Iterator<Item = Result<html5gum::Token, io::Error>> + 'a>;

/// [`Lexer`] backed by `html5gum`
pub struct Html5gumLexer<'a> {
    tokens: TokenStream<'a>,
}

impl<'a> Html5gumLexer<'a> {
    /// Tokenize everything readable from `reader`.
    ///
    /// Raw-text elements such as `<script>` and `<style>` switch the tokenizer
    /// into the matching state, so their content arrives as text rather than
    /// as bogus tags.
    pub fn new<R: Read + 'a>(reader: R) -> Self {
        let mut emitter = DefaultEmitter::default();
        emitter.switch_states(true);
        let tokenizer = Tokenizer::new_with_emitter(IoReader::new(reader), emitter);
        Self {
            tokens: Box::new(tokenizer),
        }
    }
}

impl Lexer for Html5gumLexer<'_> {
    fn next_token(&mut self) -> Result<Token, LexError> {
        loop {
            let token = match self.tokens.next() {
                None => return Ok(Token::EndOfStream),
                Some(token) => token?,
            };

            return Ok(match token {
                html5gum::Token::StartTag(tag) => {
                    let attributes = tag
                        .attributes
                        .iter()
                        .map(|(name, value)| Attribute::from_raw_name(&lossy(name), lossy(value)))
                        .collect();
                    let converted = Tag::new(lossy(&tag.name), attributes);
                    if tag.self_closing {
                        Token::SelfClosingTag(converted)
                    } else {
                        Token::StartTag(converted)
                    }
                }
                html5gum::Token::String(text) => {
                    if text.is_empty() {
                        continue;
                    }
                    Token::Text(lossy(&text))
                }
                html5gum::Token::Error(err) => {
                    log::trace!("recoverable parse error: {err:?}");
                    Token::Other
                }
                _ => Token::Other,
            });
        }
    }
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// A [`Lexer`] replaying a fixed sequence of tokens, then end of stream
pub struct TokenReplay {
    tokens: std::vec::IntoIter<Result<Token, LexError>>,
}

impl TokenReplay {
    pub fn new(tokens: Vec<Result<Token, LexError>>) -> Self {
        Self {
            tokens: tokens.into_iter(),
        }
    }
}

impl Lexer for TokenReplay {
    fn next_token(&mut self) -> Result<Token, LexError> {
        self.tokens.next().unwrap_or(Ok(Token::EndOfStream))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn collect(input: &str) -> Vec<Token> {
        let mut lexer = Html5gumLexer::new(input.as_bytes());
        let mut tokens = Vec::new();
        loop {
            match lexer.next_token().unwrap() {
                Token::EndOfStream => return tokens,
                Token::Other => {}
                token => tokens.push(token),
            }
        }
    }

    #[test]
    fn test_start_and_self_closing_tags() {
        let tokens = collect(r#"<A HREF="/x">go</A><br/>"#);
        assert_eq!(
            tokens,
            vec![
                Token::StartTag(Tag::new("a", vec![Attribute::new("href", "/x")])),
                Token::Text("go".to_string()),
                Token::SelfClosingTag(Tag::new("br", vec![])),
            ]
        );
    }

    #[test]
    fn test_text_entities_decoded() {
        assert_eq!(collect("a &amp; b"), vec![Token::Text("a & b".to_string())]);
    }

    #[test]
    fn test_script_content_is_text() {
        let tokens = collect(r#"<script>var s = "<a href='x'>";</script>"#);
        assert_eq!(tokens.len(), 2);
        assert!(matches!(&tokens[1], Token::Text(text) if text.contains("<a href='x'>")));
    }

    #[test]
    fn test_foreign_attribute_namespace() {
        let attr = Attribute::from_raw_name("xlink:href", "#icon");
        assert_eq!(attr, Attribute::namespaced("xlink", "href", "#icon"));
        assert_eq!(attr.display_name(), "xlink:href");

        let plain = Attribute::from_raw_name("data:thing", "v");
        assert!(!plain.has_namespace());
        assert_eq!(plain.key, "data:thing");
    }

    #[test]
    fn test_display_name_lowercases() {
        assert_eq!(Attribute::new("HREF", "X").display_name(), "href");
        assert_eq!(Attribute::namespaced("XML", "Lang", "en").display_name(), "xml:lang");
        assert_eq!(Attribute::namespaced("", "Id", "x").display_name(), "id");
    }

    #[test]
    fn test_io_error_surfaces() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("disk on fire"))
            }
        }

        let mut lexer = Html5gumLexer::new(Broken);
        assert!(matches!(lexer.next_token(), Err(LexError::Io(_))));
    }

    #[test]
    fn test_replay_ends_with_end_of_stream() {
        let mut lexer = TokenReplay::new(vec![Ok(Token::Text("x".into()))]);
        assert_eq!(lexer.next_token().unwrap(), Token::Text("x".into()));
        assert_eq!(lexer.next_token().unwrap(), Token::EndOfStream);
        assert_eq!(lexer.next_token().unwrap(), Token::EndOfStream);
    }
}
