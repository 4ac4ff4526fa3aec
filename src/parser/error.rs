use chrono::NaiveDateTime;

use super::UnescapeError;

/// Error arising when a single feed record cannot be turned into an event
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParserError {
    #[error("Line {0}: Malformed record, {1}.")]
    MalformedLine(usize, &'static str),
    #[error("Line {0}: Invalid date {1:?}, expected MM/DD/YYYY.")]
    MalformedDate(usize, String),
    #[error("Line {0}: Cannot decode string literal: {1}")]
    Decode(usize, #[source] UnescapeError),
    #[error("Line {0}: {1} has no reading in {2}.")]
    UnmappableTime(usize, NaiveDateTime, chrono_tz::Tz),
}

impl ParserError {
    /// Number of the feed line the error was raised for.
    pub fn line(&self) -> usize {
        match self {
            Self::MalformedLine(line, _)
            | Self::MalformedDate(line, _)
            | Self::Decode(line, _)
            | Self::UnmappableTime(line, _, _) => *line,
        }
    }
}
