//! Placing a new meeting so it does not clash with its participants' events.

use chrono::Duration;
use tracing::debug;

use crate::error::MeetbookResult;
use crate::event::{DateTime, Event};

/// Every meeting is booked for this long, whatever end time was asked for.
pub const MEETING_LENGTH_HOURS: i64 = 2;

pub fn meeting_length() -> Duration {
    Duration::hours(MEETING_LENGTH_HOURS)
}

/// The initial slot for a meeting: a start in the past is moved up to `now`,
/// and the end is always start plus the meeting length.
pub fn initial_slot(
    requested_start: DateTime,
    now: DateTime,
) -> MeetbookResult<(DateTime, DateTime)> {
    let start = requested_start.max(now);
    Ok((start, start.plus(meeting_length())?))
}

/// Whether `candidate` has to move for `existing`.
///
/// Only a candidate starting strictly after `existing` ends, or ending at or
/// before it starts, is left alone. A candidate starting the moment
/// `existing` ends still clashes.
pub fn clashes(candidate: &Event, existing: &Event) -> bool {
    !(candidate.start > existing.end || candidate.end <= existing.start)
}

/// Move `candidate` out of the way of `existing` if the two clash.
///
/// The new start is the later of the existing event's end and the
/// candidate's current end; the length is reset to the meeting length.
pub fn push_past(candidate: &Event, existing: &Event) -> MeetbookResult<Event> {
    if !clashes(candidate, existing) {
        return Ok(candidate.clone());
    }

    let start = existing.end.max(candidate.end);
    debug!(
        clashes_with = %existing.name,
        from = %candidate.start,
        to = %start,
        "pushing meeting past clashing event"
    );
    Ok(candidate.rescheduled(start, start.plus(meeting_length())?))
}

/// Fold `candidate` over `existing` in ascending start order, pushing it past
/// every clash, and repeat the fold while the result still overlaps one of
/// the events.
///
/// In ascending start order one pass already leaves the candidate clear of
/// every event: a push lands at or after the end of the event that caused it
/// and later pushes only move forward. Each extra pass would move the start
/// strictly forward, so the loop always terminates. Pushing past the end of
/// the calendar is an error.
pub fn resolve_conflicts<'a>(
    candidate: Event,
    existing: impl IntoIterator<Item = &'a Event>,
) -> MeetbookResult<Event> {
    let mut ordered: Vec<&Event> = existing.into_iter().collect();
    ordered.sort_by_key(|e| e.start);

    let mut current = candidate;
    loop {
        current = ordered.iter().try_fold(current, |acc, e| push_past(&acc, e))?;
        if !ordered.iter().any(|e| current.overlaps(e)) {
            return Ok(current);
        }
    }
}
