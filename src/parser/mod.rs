mod error;
pub use error::ParserError;

mod unescape;
pub use unescape::{UnescapeError, unescape};

mod line;
pub use line::{FeedLine, FeedLineReader};

mod record;
pub use record::FeedRecord;

mod calendar;
pub use calendar::CalendarJsParser;

use crate::LINE_PREFIX;
use crate::event::CalendarEvent;
use crate::types::DEFAULT_TIMEZONE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// Zone that times named in event summaries are read in.
    pub timezone: chrono_tz::Tz,
    /// Lines starting with this text carry one event each.
    pub line_prefix: String,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE,
            line_prefix: LINE_PREFIX.to_owned(),
        }
    }
}

/// Events of a calendar.js feed body, skipping malformed records.
pub fn parse_calendarjs(body: &str) -> impl Iterator<Item = CalendarEvent> + '_ {
    CalendarJsParser::from_body(body).events()
}
