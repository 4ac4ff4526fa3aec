//! Decode the string literal of a feed line into its date and HTML fields.
//!
//! A line looks like `calEvents[calEvents.length] = "2/8/2017|<b>Meeting</b>";`.
//! The literal is unescaped before its quotes are removed, and the payload
//! splits on `|` into a `MM/DD/YYYY` date and an HTML fragment. Fields after
//! the second are dropped.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use super::{FeedLine, ParserError, unescape};
use crate::{ASSIGN_DELIMITER, FIELD_DELIMITER, QUOTES, STATEMENT_END};

lazy_static! {
    static ref RE_FEED_DATE: Regex = Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").unwrap();
}

/// The decoded payload of one feed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRecord {
    pub date: NaiveDate,
    pub html: String,
}

impl FeedRecord {
    pub fn parse(line: &FeedLine) -> Result<Self, ParserError> {
        let number = line.number();
        let Some((_, literal)) = line.as_str().split_once(ASSIGN_DELIMITER) else {
            return Err(ParserError::MalformedLine(number, "missing assignment"));
        };
        let decoded = unescape(literal.trim()).map_err(|err| ParserError::Decode(number, err))?;
        let payload = strip_quotes(&decoded);

        let mut fields = payload.split(FIELD_DELIMITER);
        let (Some(date), Some(html)) = (fields.next(), fields.next()) else {
            return Err(ParserError::MalformedLine(number, "missing \"|\" delimiter"));
        };
        let dropped = fields.count();
        if dropped > 0 {
            debug!(line = number, dropped, "ignoring extra record fields");
        }

        let date =
            parse_date(date).ok_or_else(|| ParserError::MalformedDate(number, date.to_owned()))?;
        Ok(FeedRecord {
            date,
            html: html.to_owned(),
        })
    }
}

/// Remove one leading quote and one trailing quote, with the `;` that may follow it.
fn strip_quotes(literal: &str) -> &str {
    let literal = literal
        .strip_suffix(STATEMENT_END)
        .filter(|rest| rest.ends_with(QUOTES))
        .unwrap_or(literal);
    let literal = literal.strip_suffix(QUOTES).unwrap_or(literal);
    literal.strip_prefix(QUOTES).unwrap_or(literal)
}

/// Strict `MM/DD/YYYY`, leading zeros optional.
fn parse_date(text: &str) -> Option<NaiveDate> {
    let caps = RE_FEED_DATE.captures(text)?;
    let month = caps[1].parse().ok()?;
    let day = caps[2].parse().ok()?;
    let year = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
