use itertools::Itertools;
use tracing::warn;

use super::{FeedLine, FeedLineReader, FeedRecord, ParserError, ParserOptions};
use crate::event::{CalendarEvent, EventDate};
use crate::html::stripped_strings;
use crate::recognizer::{ClockRecognizer, TimeRecognizer};
use crate::types::localize;

/// Turns a calendar.js feed body into calendar events, one per event assignment.
///
/// Each item is the outcome for one matching line, so a malformed record
/// never hides the records after it. Use [`CalendarJsParser::events`] to
/// drop the failures instead.
pub struct CalendarJsParser<'a, R: TimeRecognizer = ClockRecognizer> {
    lines: FeedLineReader<'a>,
    recognizer: R,
    timezone: chrono_tz::Tz,
}

impl<'a> CalendarJsParser<'a, ClockRecognizer> {
    pub fn from_body(body: &'a str) -> Self {
        Self::new(body, ClockRecognizer, ParserOptions::default())
    }
}

impl<'a, R: TimeRecognizer> CalendarJsParser<'a, R> {
    pub fn new(body: &'a str, recognizer: R, options: ParserOptions) -> Self {
        let ParserOptions {
            timezone,
            line_prefix,
        } = options;
        CalendarJsParser {
            lines: FeedLineReader::with_prefix(body, line_prefix),
            recognizer,
            timezone,
        }
    }

    fn parse(&self, line: FeedLine) -> Result<CalendarEvent, ParserError> {
        let record = FeedRecord::parse(&line)?;
        let tokens = stripped_strings(&record.html);

        // The first token naming only a clock time decides; dates are not times.
        let time = tokens
            .iter()
            .find_map(|token| self.recognizer.classify(token).time_only());
        let summary = tokens.iter().join(" ");

        let date: EventDate = match time {
            Some(time) => {
                let local = record.date.and_time(time);
                localize(self.timezone, local)
                    .ok_or(ParserError::UnmappableTime(line.number(), local, self.timezone))?
                    .into()
            }
            None => EventDate::Date(record.date),
        };
        Ok(CalendarEvent::new(date, summary))
    }

    /// The events of every well-formed record; malformed ones are logged and skipped.
    pub fn events(self) -> impl Iterator<Item = CalendarEvent> + 'a
    where
        R: 'a,
    {
        self.filter_map(|result| {
            result
                .inspect_err(|err| warn!(line = err.line(), "skipping calendar record: {err}"))
                .ok()
        })
    }
}

impl<R: TimeRecognizer> Iterator for CalendarJsParser<'_, R> {
    type Item = Result<CalendarEvent, ParserError>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        Some(self.parse(line))
    }
}
