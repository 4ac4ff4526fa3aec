//! Classification of free-text tokens into clock times and calendar dates.
//!
//! The calendar parser only needs to know whether a token names a time of day
//! without a date. [`TimeRecognizer`] is the seam for that decision so that a
//! richer natural-language parser can replace [`ClockRecognizer`].

use chrono::NaiveTime;
use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::ordinal::strip_ordinals;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// Nothing date- or time-like
    None,
    /// A clock time with no calendar date
    Time(NaiveTime),
    /// A calendar date with no clock time
    Date,
    /// Both a calendar date and a clock time
    DateTime(NaiveTime),
}

impl TokenClass {
    /// The time of day, only for tokens naming a time without a date.
    pub fn time_only(&self) -> Option<NaiveTime> {
        match self {
            Self::Time(time) => Some(*time),
            _ => None,
        }
    }
}

pub trait TimeRecognizer {
    /// Classify a single stripped text token.
    ///
    /// Implementations must not carry state from one call to the next.
    fn classify(&self, token: &str) -> TokenClass;
}

impl<T: TimeRecognizer + ?Sized> TimeRecognizer for &T {
    fn classify(&self, token: &str) -> TokenClass {
        (**self).classify(token)
    }
}

lazy_static! {
    // "6 - 8 pm", "6:30-8:00 p.m." lend their meridiem to the start time, unless
    // that would start the range after it ends ("11 - 1 pm")
    static ref RE_TIME_RANGE: Regex = Regex::new(
        r"(?i)\b(\d{1,2})(?::([0-5]\d))?\s*(?:-|–|to)\s*(\d{1,2})(?::([0-5]\d))?\s*([ap])\.?\s?m\b\.?"
    )
    .unwrap();
    static ref RE_TIME_MERIDIEM: Regex =
        Regex::new(r"(?i)\b(\d{1,2})(?::([0-5]\d))?\s*([ap])\.?\s?m\b\.?").unwrap();
    static ref RE_TIME_CLOCK: Regex = Regex::new(r"\b([01]?\d|2[0-3]):([0-5]\d)\b").unwrap();
    static ref RE_TIME_WORD: Regex = Regex::new(r"(?i)\b(noon|midnight)\b").unwrap();

    static ref RE_DATE_MONTH_DAY: Regex = Regex::new(
        r"(?i)\b(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?\s+\d{1,2}\b"
    )
    .unwrap();
    static ref RE_DATE_DAY_MONTH: Regex = Regex::new(
        r"(?i)\b\d{1,2}\s+(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\b"
    )
    .unwrap();
    static ref RE_DATE_NUMERIC: Regex =
        Regex::new(r"\b(?:0?[1-9]|1[0-2])/(?:0?[1-9]|[12]\d|3[01])(?:/\d{2,4})?\b").unwrap();
    static ref RE_DATE_WORD: Regex = Regex::new(
        r"(?i)\b(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday|today|tomorrow|yesterday)\b"
    )
    .unwrap();
}

/// Pattern-based recognizer for the narrow vocabulary of board calendars.
///
/// Times are `H:MM` with or without a meridiem, `H am/pm`, `noon` and
/// `midnight`. Dates are month names next to a day number, `M/D[/Y]`,
/// weekday names and the relative words today, tomorrow and yesterday.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockRecognizer;

impl ClockRecognizer {
    pub fn new() -> Self {
        Self
    }

    fn find_time(text: &str) -> Option<NaiveTime> {
        let candidates = [
            RE_TIME_RANGE.captures(text).and_then(|c| range_time(&c)),
            RE_TIME_MERIDIEM.captures(text).and_then(|c| meridiem_time(&c)),
            RE_TIME_CLOCK.captures(text).and_then(|c| clock_time(&c)),
            RE_TIME_WORD.captures(text).and_then(|c| word_time(&c)),
        ];
        // Earliest mention wins; on a tie the more specific pattern listed first does.
        let positions = [
            RE_TIME_RANGE.find(text),
            RE_TIME_MERIDIEM.find(text),
            RE_TIME_CLOCK.find(text),
            RE_TIME_WORD.find(text),
        ];
        candidates
            .into_iter()
            .zip(positions)
            .filter_map(|(time, pos)| Some((pos?.start(), time?)))
            .min_by_key(|(start, _)| *start)
            .map(|(_, time)| time)
    }

    fn has_date(text: &str) -> bool {
        RE_DATE_MONTH_DAY.is_match(text)
            || RE_DATE_DAY_MONTH.is_match(text)
            || RE_DATE_NUMERIC.is_match(text)
            || RE_DATE_WORD.is_match(text)
    }
}

impl TimeRecognizer for ClockRecognizer {
    fn classify(&self, token: &str) -> TokenClass {
        let text = strip_ordinals(token);
        match (Self::has_date(&text), Self::find_time(&text)) {
            (false, None) => TokenClass::None,
            (false, Some(time)) => TokenClass::Time(time),
            (true, None) => TokenClass::Date,
            (true, Some(time)) => TokenClass::DateTime(time),
        }
    }
}

fn meridiem_time(caps: &Captures) -> Option<NaiveTime> {
    let hour = caps.get(1)?.as_str().parse().ok()?;
    let minute = minutes(caps.get(2))?;
    let pm = caps.get(3)?.as_str().eq_ignore_ascii_case("p");
    twelve_hour(hour, minute, pm)
}

fn range_time(caps: &Captures) -> Option<NaiveTime> {
    let start_hour = caps.get(1)?.as_str().parse().ok()?;
    let start_minute = minutes(caps.get(2))?;
    let pm = caps.get(5)?.as_str().eq_ignore_ascii_case("p");
    let end = twelve_hour(caps.get(3)?.as_str().parse().ok()?, minutes(caps.get(4))?, pm)?;
    let start = twelve_hour(start_hour, start_minute, pm)?;
    if start <= end {
        Some(start)
    } else {
        // The range crosses noon or midnight
        twelve_hour(start_hour, start_minute, !pm)
    }
}

fn minutes(m: Option<regex::Match>) -> Option<u32> {
    m.map_or(Some(0), |m| m.as_str().parse().ok())
}

fn twelve_hour(hour: u32, minute: u32, pm: bool) -> Option<NaiveTime> {
    if !(1..=12).contains(&hour) {
        return None;
    }
    let hour = match (hour, pm) {
        (12, false) => 0,
        (12, true) => 12,
        (hour, false) => hour,
        (hour, true) => hour + 12,
    };
    NaiveTime::from_hms_opt(hour, minute, 0)
}

fn clock_time(caps: &Captures) -> Option<NaiveTime> {
    let hour = caps.get(1)?.as_str().parse().ok()?;
    let minute = caps.get(2)?.as_str().parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

fn word_time(caps: &Captures) -> Option<NaiveTime> {
    let hour = if caps[1].eq_ignore_ascii_case("noon") { 12 } else { 0 };
    NaiveTime::from_hms_opt(hour, 0, 0)
}
