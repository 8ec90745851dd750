//! Field types held by an `Event`.

use std::fmt;

use chrono::{Duration, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{MeetbookError, MeetbookResult};
use crate::field::{is_alphanumeric_word, is_non_blank, validated_field};

/// Canonical on-disk and on-screen form of event times.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Also accepted on input; seconds default to zero.
const DATETIME_FORMAT_SHORT: &str = "%Y-%m-%d %H:%M";

validated_field!(
    /// Title of an event.
    EventName,
    "Event names can take any values, and it should not be blank",
    is_non_blank
);

validated_field!(
    Description,
    "Descriptions can take any values",
    |_| true
);

validated_field!(
    Venue,
    "Venues can take any values, and it should not be blank",
    is_non_blank
);

validated_field!(
    /// Single-word category for an event, e.g. `meeting` or `lecture`.
    Label,
    "Labels should be a single alphanumeric word",
    is_alphanumeric_word
);

/// A local wall-clock time with one-second resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateTime(NaiveDateTime);

impl DateTime {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Date-times should be of the format yyyy-MM-dd HH:mm:ss, e.g. 2026-10-20 14:00:00";
    pub const MESSAGE_OUT_OF_RANGE: &'static str =
        "Date-time is outside the supported calendar range";

    pub fn parse(value: &str) -> MeetbookResult<Self> {
        let trimmed = value.trim();
        NaiveDateTime::parse_from_str(trimmed, DATETIME_FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(trimmed, DATETIME_FORMAT_SHORT))
            .map(DateTime)
            .map_err(|_| MeetbookError::Parse(Self::MESSAGE_CONSTRAINTS.to_string()))
    }

    pub fn is_valid(value: &str) -> bool {
        Self::parse(value).is_ok()
    }

    /// Wrap a naive time, dropping anything below whole seconds.
    pub fn from_naive(value: NaiveDateTime) -> Self {
        DateTime(value.with_nanosecond(0).unwrap_or(value))
    }

    pub fn naive(&self) -> NaiveDateTime {
        self.0
    }

    /// `self + duration`, failing instead of overflowing the calendar.
    pub fn plus(&self, duration: Duration) -> MeetbookResult<Self> {
        self.0
            .checked_add_signed(duration)
            .map(DateTime)
            .ok_or_else(|| MeetbookError::Parse(Self::MESSAGE_OUT_OF_RANGE.to_string()))
    }
}

impl std::str::FromStr for DateTime {
    type Err = MeetbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DateTime {
    type Error = MeetbookError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DateTime> for String {
    fn from(value: DateTime) -> Self {
        value.to_string()
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATETIME_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn parses_long_and_short_forms() {
        let long = DateTime::parse("2026-10-20 14:30:15").unwrap();
        assert_eq!(long.to_string(), "2026-10-20 14:30:15");

        let short = DateTime::parse(" 2026-10-20 14:30 ").unwrap();
        assert_eq!(short.to_string(), "2026-10-20 14:30:00");
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(!DateTime::is_valid("2026-10-20"));
        assert!(!DateTime::is_valid("20/10/2026 14:00"));
        assert!(!DateTime::is_valid("2026-13-01 10:00:00"));
    }

    #[test]
    fn from_naive_drops_subseconds() {
        let precise = NaiveDate::from_ymd_opt(2026, 10, 20)
            .unwrap()
            .and_hms_milli_opt(9, 15, 42, 250)
            .unwrap();
        assert_eq!(DateTime::from_naive(precise).to_string(), "2026-10-20 09:15:42");
    }

    #[test]
    fn plus_stops_at_the_end_of_the_calendar() {
        let late = DateTime::from_naive(NaiveDateTime::MAX);
        assert!(matches!(late.plus(Duration::hours(2)), Err(MeetbookError::Parse(_))));

        let start = DateTime::parse("2026-10-20 14:00").unwrap();
        assert_eq!(start.plus(Duration::hours(2)).unwrap().to_string(), "2026-10-20 16:00:00");
    }

    #[test]
    fn serializes_as_formatted_string() {
        let dt = DateTime::parse("2026-10-20 14:00:00").unwrap();
        let json = serde_json::to_string(&dt).unwrap();
        assert_eq!(json, "\"2026-10-20 14:00:00\"");
        let back: DateTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dt);
        assert!(serde_json::from_str::<DateTime>("\"tomorrow\"").is_err());
    }

    #[test]
    fn description_may_be_empty_but_label_may_not() {
        assert!(Description::parse("").is_ok());
        assert!(Label::parse("").is_err());
        assert!(Label::parse("work stuff").is_err());
        assert!(Venue::parse("  ").is_err());
    }
}
