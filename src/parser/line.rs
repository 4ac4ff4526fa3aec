//! Split a feed body into lines and keep the event assignments.

use std::borrow::Cow;

use crate::LINE_PREFIX;

/// A feed line holding one event assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedLine<'a> {
    number: usize,
    inner: &'a str,
}

impl<'a> FeedLine<'a> {
    pub fn new(number: usize, inner: &'a str) -> Self {
        FeedLine { number, inner }
    }

    /// 1-based position of the line in the feed body.
    #[inline]
    pub fn number(&self) -> usize {
        self.number
    }

    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.inner
    }
}

/// Iterator over the lines of a feed body that start with the event prefix.
///
/// `\r\n` and every character Python's `str.splitlines` breaks on end a line:
/// `\n`, `\r`, vertical tab, form feed, the file/group/record separators,
/// NEL and the Unicode line and paragraph separators. Lines are numbered
/// across the whole body, including the ones that are skipped.
#[derive(Debug, Clone)]
pub struct FeedLineReader<'a> {
    rest: &'a str,
    number: usize,
    prefix: Cow<'a, str>,
}

impl<'a> FeedLineReader<'a> {
    pub fn from_body(body: &'a str) -> Self {
        Self::with_prefix(body, LINE_PREFIX)
    }

    pub fn with_prefix(body: &'a str, prefix: impl Into<Cow<'a, str>>) -> Self {
        FeedLineReader {
            rest: body,
            number: 0,
            prefix: prefix.into(),
        }
    }

    fn next_line(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        self.number += 1;
        let Some((end, brk)) = self.rest.char_indices().find(|(_, c)| is_line_break(*c)) else {
            return Some(std::mem::take(&mut self.rest));
        };
        let line = &self.rest[..end];
        let terminator = if self.rest[end..].starts_with("\r\n") {
            2
        } else {
            brk.len_utf8()
        };
        self.rest = &self.rest[end + terminator..];
        Some(line)
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{b}' | '\u{c}' | '\u{1c}'..='\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

impl<'a> Iterator for FeedLineReader<'a> {
    type Item = FeedLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(line) = self.next_line() {
            if line.starts_with(self.prefix.as_ref()) {
                return Some(FeedLine::new(self.number, line));
            }
        }
        None
    }
}
