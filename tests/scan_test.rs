use htmlrep_lib::lexer::{Attribute, LexError, Lexer, Tag, Token, TokenReplay};
use htmlrep_lib::{ReportSelection, scan, scan_reader, scan_str, write_reports};
use pretty_assertions::assert_eq;
use std::io::{self, Read};

#[test]
fn test_fragment_only_href_is_filtered() {
    let report = scan_str(r##"<a href="#">x</a><a href="/ok">y</a>"##).unwrap();
    assert_eq!(report.attribute_links.sorted(), vec!["/ok"]);
}

#[test]
fn test_javascript_links_are_filtered() {
    let report = scan_str(r#"<a href="JavaScript:void(0)">x</a><a href="javascript.html">y</a>"#).unwrap();
    assert_eq!(report.attribute_links.sorted(), vec!["javascript.html"]);
}

#[test]
fn test_duplicate_attribute_keeps_first_value() {
    let report = scan_str(r#"<a href="/one" href="/two">x</a>"#).unwrap();
    assert_eq!(report.attribute_links.sorted(), vec!["/one"]);
    assert_eq!(report.tags.attributes("a").unwrap(), vec!["href"]);
}

#[test]
fn test_concatenated_documents() {
    let html = concat!(
        "<!DOCTYPE html><html><head><title>One</title></head>",
        r#"<body><p class="intro">Hello</p></body></html>"#,
        "<!DOCTYPE html><html><head><title>Two</title></head>",
        r#"<body><p id="main">Bye, see www.example.org.</p></body></html>"#,
    );
    let report = scan_str(html).unwrap();

    assert_eq!(
        report.tags.sorted(),
        vec![
            ("body", vec![]),
            ("head", vec![]),
            ("html", vec![]),
            ("p", vec!["class", "id"]),
            ("title", vec![]),
        ]
    );
    assert_eq!(report.text_links.sorted(), vec!["www.example.org"]);
}

#[test]
fn test_malformed_markup_is_still_scanned() {
    let html = r#"<div <a href=/unquoted>broken <img src="x.png" </p></span>text example.net"#;
    let report = scan_str(html).unwrap();
    assert!(report.tags.contains_tag("div"));
    assert!(report.attribute_links.contains("x.png") || report.attribute_links.contains("/unquoted"));
}

#[test]
fn test_attribute_display_names() {
    let html = r##"<svg xmlns:xlink="http://www.w3.org/1999/xlink"><use xlink:href="#star" CLASS="i"/></svg>"##;
    let report = scan_str(html).unwrap();
    assert_eq!(report.tags.attributes("svg").unwrap(), vec!["xmlns:xlink"]);
    assert_eq!(report.tags.attributes("use").unwrap(), vec!["class", "xlink:href"]);
    assert_eq!(report.attribute_links.sorted(), vec!["#star"]);
}

#[test]
fn test_script_and_style_content_is_text() {
    let html = r#"<script>document.write('<a href="/hidden">')</script><style>a { color: red }</style>"#;
    let report = scan_str(html).unwrap();
    assert!(!report.tags.contains_tag("a"));
    assert!(report.attribute_links.is_empty());
}

#[test]
fn test_all_link_rules_end_to_end() {
    let html = r#"
        <form action="/submit"><input formaction="/alt"><button formaction="/other">Go</button></form>
        <video poster="poster.jpg" src="movie.mp4"></video>
        <object data="movie.swf"></object>
        <applet code="Main.class" codebase="/applets/"></applet>
        <q cite="https://quotes.example/1">To be</q>
        <blockquote cite="The Times">...</blockquote>
        <img srcset="small.jpg 480w, large.jpg 1080w" alt="a.b.c">
        <div data-src="lazy.png" data-href="/lazy" title="/not-a-link"></div>
    "#;
    let report = scan_str(html).unwrap();
    assert_eq!(
        report.attribute_links.sorted(),
        vec![
            "/alt",
            "/applets/",
            "/lazy",
            "/other",
            "/submit",
            "Main.class",
            "https://quotes.example/1",
            "large.jpg",
            "lazy.png",
            "movie.mp4",
            "movie.swf",
            "poster.jpg",
            "small.jpg",
        ]
    );
}

#[test]
fn test_lexer_error_aborts_scan() {
    let mut lexer = TokenReplay::new(vec![
        Ok(Token::StartTag(Tag::new("a", vec![Attribute::new("href", "/kept")]))),
        Err(LexError::Io(io::Error::new(io::ErrorKind::UnexpectedEof, "connection reset"))),
    ]);
    assert!(scan(&mut lexer).is_err());
}

#[test]
fn test_read_error_aborts_scan() {
    struct FailAfter {
        data: &'static [u8],
    }

    impl Read for FailAfter {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.data.is_empty() {
                return Err(io::Error::other("device went away"));
            }
            let n = buf.len().min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    let err = scan_reader(FailAfter {
        data: br#"<a href="/x">example.com</a>"#,
    })
    .unwrap_err();
    assert!(err.to_string().contains("device went away"));
}

#[test]
fn test_custom_lexer() {
    struct Words(Vec<&'static str>);

    impl Lexer for Words {
        fn next_token(&mut self) -> Result<Token, LexError> {
            Ok(match self.0.pop() {
                Some(word) => Token::Text(word.to_string()),
                None => Token::EndOfStream,
            })
        }
    }

    let report = scan(&mut Words(vec!["example.com", "hello", "/", "1/2"])).unwrap();
    assert_eq!(report.text_links.sorted(), vec!["/", "example.com"]);
    assert!(report.tags.is_empty());
}

#[test]
fn test_report_output() {
    let report = scan_str(r#"<A HREF="/b" Title="t"></A><a href="/a">see /c</a><BR>"#).unwrap();
    let mut out = Vec::new();
    write_reports(&report, ReportSelection::all(), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "a\n\thref\n\ttitle\nbr\n\n/a\n/b\n\n/c\n");
}
