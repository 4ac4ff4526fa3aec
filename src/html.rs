//! HTML helpers for the free-text half of a feed record.
//!
//! [`stripped_strings`] turns a fragment into the plain-text tokens used for
//! summaries and time recognition. [`clean`] keeps a small allow-list of
//! formatting tags for consumers that want markup preserved.

use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use scraper::{ElementRef, Html, Node};

const ALLOWED_TAGS: [&str; 13] = [
    "a",
    "abbr",
    "acronym",
    "b",
    "blockquote",
    "code",
    "em",
    "i",
    "li",
    "ol",
    "strong",
    "ul",
    "p",
];

const ALLOWED_PROTOCOLS: [&str; 3] = ["http", "https", "mailto"];

/// Elements whose text is never part of the readable content
const OPAQUE_TAGS: [&str; 4] = ["script", "style", "template", "noscript"];

lazy_static! {
    static ref RE_WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Text nodes of an HTML fragment, in document order.
///
/// Each string is entity-decoded and trimmed with inner whitespace collapsed
/// to single spaces. Strings that end up empty are dropped.
pub fn stripped_strings(html: &str) -> Vec<String> {
    let fragment = Html::parse_fragment(html);
    let mut strings = vec![];
    collect_strings(fragment.root_element(), &mut strings);
    strings
}

/// The plain-text rendering of a fragment: its stripped strings joined by spaces.
pub fn plain_text(html: &str) -> String {
    stripped_strings(html).iter().join(" ")
}

fn collect_strings(element: ElementRef, out: &mut Vec<String>) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let normalised = RE_WHITESPACE.replace_all(text.trim(), " ");
                if !normalised.is_empty() {
                    out.push(normalised.into_owned());
                }
            }
            Node::Element(el) if OPAQUE_TAGS.contains(&el.name()) => {}
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    collect_strings(child, out);
                }
            }
            _ => {}
        }
    }
}

/// Strip all markup outside the formatting allow-list.
///
/// Disallowed tags are removed but their text is kept. Allowed tags lose all
/// attributes except `href`/`title` on links and `title` on abbreviations.
/// Returns `None` for missing or empty input.
pub fn clean(html: Option<&str>) -> Option<String> {
    let html = html.filter(|html| !html.is_empty())?;
    let fragment = Html::parse_fragment(html);
    let mut out = String::with_capacity(html.len());
    write_clean(fragment.root_element(), &mut out);
    Some(out)
}

fn write_clean(element: ElementRef, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(&escape(text, false)),
            Node::Element(el) if OPAQUE_TAGS.contains(&el.name()) => {}
            Node::Element(el) => {
                let Some(child) = ElementRef::wrap(child) else {
                    continue;
                };
                let name = el.name();
                if !ALLOWED_TAGS.contains(&name) {
                    write_clean(child, out);
                    continue;
                }
                out.push('<');
                out.push_str(name);
                for (attr, value) in el.attrs() {
                    if allowed_attribute(name, attr, value) {
                        out.push_str(&format!(" {attr}=\"{}\"", escape(value, true)));
                    }
                }
                out.push('>');
                write_clean(child, out);
                out.push_str(&format!("</{name}>"));
            }
            _ => {}
        }
    }
}

fn allowed_attribute(tag: &str, attr: &str, value: &str) -> bool {
    match (tag, attr) {
        ("a", "href") => allowed_href(value),
        ("a" | "abbr" | "acronym", "title") => true,
        _ => false,
    }
}

/// Relative URLs pass, absolute ones only with an allowed scheme.
///
/// The URL is first read the way browsers read it: leading and trailing
/// C0 controls and spaces are dropped and tabs and newlines removed
/// everywhere. Anything before the first `:` that precedes a path, query or
/// fragment counts as a scheme, so an obfuscated one never passes as relative.
fn allowed_href(value: &str) -> bool {
    let url: String = value
        .trim_matches(|c: char| c.is_ascii_control() || c == ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
        .collect();
    let head = url.split(['/', '?', '#']).next().unwrap_or_default();
    match head.split_once(':') {
        None => true,
        Some((scheme, _)) => ALLOWED_PROTOCOLS
            .iter()
            .any(|protocol| scheme.eq_ignore_ascii_case(protocol)),
    }
}

fn escape(text: &str, attribute: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{clean, plain_text, stripped_strings};
    use rstest::rstest;

    #[test]
    fn strings_in_document_order() {
        assert_eq!(
            stripped_strings("<b>Board Meeting</b><br/>  at <i>6:00 PM</i>. "),
            vec!["Board Meeting", "at", "6:00 PM", "."]
        );
    }

    #[test]
    fn strings_decode_entities_and_collapse_whitespace() {
        assert_eq!(
            stripped_strings("Parks &amp; Recreation\n\n   Committee&nbsp;"),
            vec!["Parks & Recreation Committee"]
        );
    }

    #[test]
    fn strings_skip_scripts_and_comments() {
        assert_eq!(
            stripped_strings("<script>var x = 1;</script><!-- hidden -->Visible"),
            vec!["Visible"]
        );
    }

    #[test]
    fn plain_text_joins_with_spaces() {
        assert_eq!(
            plain_text("<p>Land Use</p><p>Committee</p>"),
            "Land Use Committee"
        );
        assert_eq!(plain_text(""), "");
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some(""), None)]
    #[case(Some("plain"), Some("plain"))]
    #[case(Some("<b>bold</b> <span>span</span>"), Some("<b>bold</b> span"))]
    #[case(
        Some(r#"<a href="http://nyc.gov" onclick="x()" title="NYC">link</a>"#),
        Some(r#"<a href="http://nyc.gov" title="NYC">link</a>"#)
    )]
    #[case(
        Some(r#"<a href="javascript:alert(1)">link</a>"#),
        Some("<a>link</a>")
    )]
    #[case(Some(r#"<a href="/agenda.pdf">a</a>"#), Some(r#"<a href="/agenda.pdf">a</a>"#))]
    #[case(
        Some(r#"<a href="mailto:qn02@cb.nyc.gov">mail</a>"#),
        Some(r#"<a href="mailto:qn02@cb.nyc.gov">mail</a>"#)
    )]
    #[case(
        Some(r#"<a href="  HTTPS://nyc.gov/a?b=c:d">x</a>"#),
        Some(r#"<a href="  HTTPS://nyc.gov/a?b=c:d">x</a>"#)
    )]
    #[case(Some("<a href=\"java\nscript:alert(1)\">x</a>"), Some("<a>x</a>"))]
    #[case(Some("<a href=\"java\tscript:alert(1)\">x</a>"), Some("<a>x</a>"))]
    #[case(Some("<a href=\"jav\r\nascript:alert(1)\">x</a>"), Some("<a>x</a>"))]
    #[case(Some(r#"<a href="&#x01;javascript:alert(1)">x</a>"#), Some("<a>x</a>"))]
    #[case(Some("<a href=\" \u{1f} JavaScript:alert(1)\">x</a>"), Some("<a>x</a>"))]
    #[case(Some(r#"<a href="java&#x01;script:alert(1)">x</a>"#), Some("<a>x</a>"))]
    #[case(Some(r#"<a href="data:text/html,hi">x</a>"#), Some("<a>x</a>"))]
    #[case(Some(r#"<p class="x">One &amp; two</p>"#), Some("<p>One &amp; two</p>"))]
    #[case(
        Some("<div><ul><li>first</li></ul></div>"),
        Some("<ul><li>first</li></ul>")
    )]
    #[case(Some("<style>p {}</style>text"), Some("text"))]
    fn cleans(#[case] input: Option<&str>, #[case] expected: Option<&str>) {
        assert_eq!(clean(input).as_deref(), expected);
    }
}
