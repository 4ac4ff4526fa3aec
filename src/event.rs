use chrono::{DateTime, NaiveDate, NaiveTime};
use derive_more::{Display, From};
use serde::Serialize;

/// When an event happens: a bare day, or a zoned moment when the summary named a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, From, Serialize)]
#[serde(untagged)]
pub enum EventDate {
    #[display("{_0}")]
    Date(NaiveDate),
    #[display("{}", _0.to_rfc3339())]
    DateTime(DateTime<chrono_tz::Tz>),
}

impl EventDate {
    #[inline]
    pub fn is_date(&self) -> bool {
        matches!(self, Self::Date(_))
    }

    /// The calendar day, in the event's own zone for timed events.
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::Date(date) => *date,
            Self::DateTime(dt) => dt.date_naive(),
        }
    }

    pub fn time(&self) -> Option<NaiveTime> {
        match self {
            Self::Date(_) => None,
            Self::DateTime(dt) => Some(dt.time()),
        }
    }

    pub fn timezone(&self) -> Option<chrono_tz::Tz> {
        match self {
            Self::Date(_) => None,
            Self::DateTime(dt) => Some(dt.timezone()),
        }
    }
}

/// One entry of a scraped calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    pub date: EventDate,
    /// Plain text with markup and entities removed
    pub summary: String,
    /// Not published by calendar.js feeds, always empty
    pub location: String,
    /// Not published by calendar.js feeds, always empty
    pub description: String,
}

impl CalendarEvent {
    pub fn new(date: impl Into<EventDate>, summary: String) -> Self {
        Self {
            date: date.into(),
            summary,
            location: String::new(),
            description: String::new(),
        }
    }
}
