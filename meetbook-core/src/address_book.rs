//! The persisted snapshot: every person and every event.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MeetbookError, MeetbookResult};
use crate::event::{Event, EventId};
use crate::person::{Person, PersonId};

/// Persons and events, in insertion order.
///
/// No two persons are the same person and no two events are the same event,
/// under their domain equalities. Loading goes through `add_person` and
/// `add_event`, so a file breaking that rule is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredAddressBook")]
pub struct AddressBook {
    persons: Vec<Person>,
    events: Vec<Event>,
}

/// On-disk shape, before the duplicate checks.
#[derive(Deserialize)]
struct StoredAddressBook {
    #[serde(default)]
    persons: Vec<Person>,
    #[serde(default)]
    events: Vec<Event>,
}

impl TryFrom<StoredAddressBook> for AddressBook {
    type Error = MeetbookError;

    fn try_from(stored: StoredAddressBook) -> Result<Self, Self::Error> {
        let mut book = AddressBook::new();
        for person in stored.persons {
            book.add_person(person)?;
        }
        for event in stored.events {
            book.add_event(event)?;
        }
        Ok(book)
    }
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.persons.iter().find(|p| p.id == id)
    }

    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn event_mut(&mut self, id: EventId) -> Option<&mut Event> {
        self.events.iter_mut().find(|e| e.id == id)
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    pub fn has_event(&self, event: &Event) -> bool {
        self.events.iter().any(|e| e.is_same_event(event))
    }

    pub fn add_person(&mut self, person: Person) -> MeetbookResult<()> {
        if self.has_person(&person) {
            return Err(MeetbookError::DuplicatePerson);
        }
        self.persons.push(person);
        Ok(())
    }

    /// Remove a person and scrub them from every event's participants.
    pub fn remove_person(&mut self, id: PersonId) -> Option<Person> {
        let position = self.persons.iter().position(|p| p.id == id)?;
        let removed = self.persons.remove(position);

        let scrubbed = self
            .events
            .iter_mut()
            .map(|e| e.remove_person(id))
            .filter(|was_participant| *was_participant)
            .count();
        debug!(person = %removed.name, events = scrubbed, "removed person");

        Some(removed)
    }

    pub fn add_event(&mut self, event: Event) -> MeetbookResult<()> {
        if self.has_event(&event) {
            return Err(MeetbookError::DuplicateEvent);
        }
        self.events.push(event);
        Ok(())
    }
}
