//! Events: meetings between contacts.

pub mod block;
mod fields;

pub use block::Block;
pub use fields::{DateTime, Description, EventName, Label, Venue, DATETIME_FORMAT};

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::person::PersonId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventId(Uuid);

impl EventId {
    pub fn new() -> Self {
        EventId(Uuid::new_v4())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

/// A scheduled event and the contacts taking part in it.
///
/// Participants are held by id; the person records live in the address book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub id: EventId,
    pub name: EventName,
    pub description: Description,
    pub venue: Venue,
    pub start: DateTime,
    pub end: DateTime,
    pub label: Label,
    #[serde(default)]
    pub participants: BTreeSet<PersonId>,
}

impl Event {
    pub fn new(
        name: EventName,
        description: Description,
        venue: Venue,
        start: DateTime,
        end: DateTime,
        label: Label,
    ) -> Self {
        Event {
            id: EventId::new(),
            name,
            description,
            venue,
            start,
            end,
            label,
            participants: BTreeSet::new(),
        }
    }

    /// The same event moved to a new time slot.
    pub fn rescheduled(&self, start: DateTime, end: DateTime) -> Self {
        Event {
            start,
            end,
            ..self.clone()
        }
    }

    pub fn has_person(&self, person: PersonId) -> bool {
        self.participants.contains(&person)
    }

    pub fn has_any_person(&self, persons: &[PersonId]) -> bool {
        persons.iter().any(|p| self.has_person(*p))
    }

    pub fn add_persons(&mut self, persons: impl IntoIterator<Item = PersonId>) {
        self.participants.extend(persons);
    }

    /// Returns true if the person was a participant.
    pub fn remove_person(&mut self, person: PersonId) -> bool {
        self.participants.remove(&person)
    }

    /// Whether the two time ranges intersect. Ranges are half-open, so
    /// back-to-back events do not overlap. Booking a meeting uses the
    /// stricter [`crate::scheduler::clashes`].
    pub fn overlaps(&self, other: &Event) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Domain equality used to reject duplicate events: same name, same
    /// venue and same start. Description, label, end and participants are
    /// ignored.
    pub fn is_same_event(&self, other: &Event) -> bool {
        self.name == other.name && self.venue == other.venue && self.start == other.start
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] at {} from {} to {}",
            self.name, self.label, self.venue, self.start, self.end
        )?;
        if !self.description.as_str().is_empty() {
            write!(f, " ({})", self.description)?;
        }
        Ok(())
    }
}
