//! Reminders for upcoming events.
//!
//! Reminders are never stored. They are projected from the event list on
//! demand, so a reminder can never outlive the event it points at.

use std::fmt;
use std::str::FromStr;

use chrono::Duration;

use crate::error::{MeetbookError, MeetbookResult};
use crate::event::{DateTime, Event};

/// A unit of time for reminder windows and lead times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Unit {
    Min,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl Unit {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Units should be one of min, hour, day, week, month, year";

    /// Largest first, for picking the coarsest whole unit.
    const DESCENDING: [Unit; 6] = [
        Unit::Year,
        Unit::Month,
        Unit::Week,
        Unit::Day,
        Unit::Hour,
        Unit::Min,
    ];

    pub fn parse(value: &str) -> MeetbookResult<Self> {
        match value.trim().to_lowercase().as_str() {
            "min" => Ok(Unit::Min),
            "hour" => Ok(Unit::Hour),
            "day" => Ok(Unit::Day),
            "week" => Ok(Unit::Week),
            "month" => Ok(Unit::Month),
            "year" => Ok(Unit::Year),
            _ => Err(MeetbookError::Parse(Self::MESSAGE_CONSTRAINTS.to_string())),
        }
    }

    pub fn is_valid(value: &str) -> bool {
        Self::parse(value).is_ok()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Min => "min",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Week => "week",
            Unit::Month => "month",
            Unit::Year => "year",
        }
    }

    /// Length of one unit. Months count as 30 days and years as 365.
    pub fn duration(&self) -> Duration {
        match self {
            Unit::Min => Duration::minutes(1),
            Unit::Hour => Duration::hours(1),
            Unit::Day => Duration::days(1),
            Unit::Week => Duration::weeks(1),
            Unit::Month => Duration::days(30),
            Unit::Year => Duration::days(365),
        }
    }
}

impl FromStr for Unit {
    type Err = MeetbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An amount of some unit, e.g. `2 hour`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub amount: i64,
    pub unit: Unit,
}

impl Interval {
    pub fn new(amount: i64, unit: Unit) -> Self {
        Interval { amount, unit }
    }

    /// `None` when the interval is too long to represent.
    pub fn duration(&self) -> Option<Duration> {
        self.unit
            .duration()
            .num_seconds()
            .checked_mul(self.amount)
            .and_then(Duration::try_seconds)
    }

    /// Express `duration` in the coarsest unit that fits at least once,
    /// rounding down. Anything under a minute is `0 min`.
    pub fn approximate(duration: Duration) -> Self {
        Unit::DESCENDING
            .iter()
            .find_map(|unit| {
                let amount = duration.num_seconds() / unit.duration().num_seconds();
                (amount >= 1).then_some(Interval::new(amount, *unit))
            })
            .unwrap_or(Interval::new(0, Unit::Min))
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.unit)
    }
}

/// A nudge about an event starting soon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub event: Event,
    /// Time from now until the event starts.
    pub interval: Interval,
    pub message: String,
}

impl Reminder {
    pub fn for_event(event: &Event, now: DateTime) -> Self {
        let interval = Interval::approximate(event.start.naive() - now.naive());
        let message = format!(
            "{} at {} starts in {} {}",
            event.name, event.venue, interval.amount, interval.unit
        );
        Reminder {
            event: event.clone(),
            interval,
            message,
        }
    }
}

/// Reminders for every event starting within `window` from `now`, soonest
/// first. Events already underway are skipped. A window reaching past the
/// end of the calendar covers every later event.
pub fn upcoming<'a>(
    events: impl IntoIterator<Item = &'a Event>,
    now: DateTime,
    window: Duration,
) -> Vec<Reminder> {
    let horizon = now.plus(window).ok();
    let mut due: Vec<&Event> = events
        .into_iter()
        .filter(|e| e.start >= now && horizon.map_or(true, |h| e.start <= h))
        .collect();
    due.sort_by_key(|e| e.start);
    due.into_iter().map(|e| Reminder::for_event(e, now)).collect()
}
