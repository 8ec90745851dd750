//! Time-of-day blocks used to filter the event list.

use std::fmt;

use chrono::NaiveTime;

use crate::error::{MeetbookError, MeetbookResult};
use crate::event::Event;

/// Named blocks and their hours, as (name, start, end).
const NAMED_BLOCKS: [(&str, u32, u32); 11] = [
    ("morning", 6, 12),
    ("afternoon", 12, 18),
    ("evening", 18, 22),
    ("night", 22, 6),
    ("midnight", 23, 1),
    ("school", 8, 15),
    ("breakfast", 7, 9),
    ("lunch", 11, 14),
    ("dinner", 17, 20),
    ("supper", 20, 23),
    ("brunch", 10, 12),
];

/// A daily time interval `[start, end)`, possibly wrapping past midnight.
///
/// An anti-block matches the complement of its interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    start: NaiveTime,
    end: NaiveTime,
    anti: bool,
}

impl Block {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Blocks should be a named block (morning, \
        afternoon, evening, night, midnight, school, breakfast, lunch, dinner, supper, brunch) \
        or two times HH:MM HH:MM, optionally preceded by ! to exclude the block";

    pub fn new(start: NaiveTime, end: NaiveTime, anti: bool) -> Self {
        Block { start, end, anti }
    }

    /// Look up a named block such as `lunch`.
    pub fn named(name: &str, anti: bool) -> Option<Self> {
        NAMED_BLOCKS
            .iter()
            .find(|(n, _, _)| n.eq_ignore_ascii_case(name))
            .and_then(|(_, start, end)| {
                Some(Block::new(
                    NaiveTime::from_hms_opt(*start, 0, 0)?,
                    NaiveTime::from_hms_opt(*end, 0, 0)?,
                    anti,
                ))
            })
    }

    /// Parse `lunch`, `!night` or `14:00 18:00`.
    pub fn parse(value: &str) -> MeetbookResult<Self> {
        let trimmed = value.trim();
        let (anti, rest) = match trimmed.strip_prefix('!') {
            Some(rest) => (true, rest.trim()),
            None => (false, trimmed),
        };

        if let Some(block) = Block::named(rest, anti) {
            return Ok(block);
        }

        let times: Vec<&str> = rest.split_whitespace().collect();
        let [first, second] = times.as_slice() else {
            return Err(MeetbookError::Parse(Self::MESSAGE_CONSTRAINTS.to_string()));
        };

        Ok(Block::new(parse_time(first)?, parse_time(second)?, anti))
    }

    pub fn is_anti(&self) -> bool {
        self.anti
    }

    /// Whether `time` falls inside the interval, ignoring the anti flag.
    /// A block whose start equals its end covers the whole day.
    pub fn covers(&self, time: NaiveTime) -> bool {
        if self.start < self.end {
            self.start <= time && time < self.end
        } else if self.start > self.end {
            time >= self.start || time < self.end
        } else {
            true
        }
    }

    /// Whether an event's start time satisfies this block.
    pub fn admits(&self, event: &Event) -> bool {
        self.covers(event.start.naive().time()) != self.anti
    }
}

fn parse_time(value: &str) -> MeetbookResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| MeetbookError::Parse(Block::MESSAGE_CONSTRAINTS.to_string()))
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.anti {
            write!(f, "!")?;
        }
        write!(f, "{} {}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn parses_named_blocks() {
        let lunch = Block::parse("lunch").unwrap();
        assert_eq!(lunch, Block::new(at(11, 0), at(14, 0), false));

        let not_night = Block::parse("! Night").unwrap();
        assert!(not_night.is_anti());
        assert_eq!(not_night.to_string(), "!22:00 06:00");
    }

    #[test]
    fn parses_explicit_times() {
        let block = Block::parse("  14:00 18:30 ").unwrap();
        assert_eq!(block, Block::new(at(14, 0), at(18, 30), false));
    }

    #[test]
    fn rejects_garbage() {
        assert!(Block::parse("teatime").is_err());
        assert!(Block::parse("14:00").is_err());
        assert!(Block::parse("14:00 25:00").is_err());
        assert!(Block::parse("14:00 15:00 16:00").is_err());
        assert!(Block::parse("").is_err());
    }

    #[test]
    fn covers_is_half_open() {
        let afternoon = Block::named("afternoon", false).unwrap();
        assert!(afternoon.covers(at(12, 0)));
        assert!(afternoon.covers(at(17, 59)));
        assert!(!afternoon.covers(at(18, 0)));
        assert!(!afternoon.covers(at(11, 59)));
    }

    #[test]
    fn wrapping_block_spans_midnight() {
        let night = Block::named("night", false).unwrap();
        assert!(night.covers(at(23, 30)));
        assert!(night.covers(at(0, 0)));
        assert!(night.covers(at(5, 59)));
        assert!(!night.covers(at(6, 0)));
        assert!(!night.covers(at(12, 0)));
    }

    #[test]
    fn degenerate_block_covers_whole_day() {
        let block = Block::new(at(9, 0), at(9, 0), false);
        assert!(block.covers(at(3, 0)));
        assert!(block.covers(at(21, 0)));
    }
}
