use chrono::{DateTime, MappedLocalTime, NaiveDateTime, TimeDelta, TimeZone};

/// Zone of the New York City community board feeds
pub const DEFAULT_TIMEZONE: chrono_tz::Tz = chrono_tz::US::Eastern;

/// Attach `tz` to a wall-clock reading.
///
/// A reading repeated by a backward transition resolves to the later,
/// standard-time offset. A reading skipped by a forward transition keeps the
/// offset in force before the gap, which lands one hour later on the clock.
pub fn localize(tz: chrono_tz::Tz, local: NaiveDateTime) -> Option<DateTime<chrono_tz::Tz>> {
    match tz.from_local_datetime(&local) {
        MappedLocalTime::Single(dt) => Some(dt),
        MappedLocalTime::Ambiguous(_, latest) => Some(latest),
        MappedLocalTime::None => tz
            .from_local_datetime(&(local + TimeDelta::hours(1)))
            .earliest(),
    }
}
