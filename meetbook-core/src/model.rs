//! In-memory state the commands operate on.
//!
//! The model owns the address book and its committed history, plus what the
//! front end is currently looking at: a person filter, an event filter and
//! the selected event. Everything is read through borrowed views and changed
//! only through the named operations below.

use tracing::{debug, info};

use crate::address_book::AddressBook;
use crate::error::{MeetbookError, MeetbookResult, MESSAGE_INVALID_EVENT_DISPLAYED_INDEX};
use crate::event::{Block, Event, EventId};
use crate::person::{Person, PersonId, PersonPredicate};

/// Which events are visible.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EventFilter {
    #[default]
    ShowAll,
    /// Events admitted by every block.
    Blocks(Vec<Block>),
}

impl EventFilter {
    pub fn test(&self, event: &Event) -> bool {
        match self {
            EventFilter::ShowAll => true,
            EventFilter::Blocks(blocks) => blocks.iter().all(|b| b.admits(event)),
        }
    }
}

pub struct Model {
    address_book: AddressBook,
    history: Vec<AddressBook>,
    current_state: usize,
    person_filter: PersonPredicate,
    event_filter: EventFilter,
    selected_event: Option<EventId>,
}

impl Model {
    pub fn new(address_book: AddressBook) -> Self {
        Model {
            history: vec![address_book.clone()],
            address_book,
            current_state: 0,
            person_filter: PersonPredicate::ShowAll,
            event_filter: EventFilter::ShowAll,
            selected_event: None,
        }
    }

    pub fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    /// Replace all data, e.g. by `clear`. Not committed until
    /// `commit_address_book` is called.
    pub fn reset_data(&mut self, address_book: AddressBook) {
        self.address_book = address_book;
        self.refresh_selection();
    }

    // PERSONS:

    pub fn has_person(&self, person: &Person) -> bool {
        self.address_book.has_person(person)
    }

    pub fn add_person(&mut self, person: Person) -> MeetbookResult<()> {
        self.address_book.add_person(person)?;
        self.person_filter = PersonPredicate::ShowAll;
        Ok(())
    }

    /// Remove a person from the book and from every event they take part in.
    pub fn delete_person(&mut self, id: PersonId) -> Option<Person> {
        let removed = self.address_book.remove_person(id);
        self.refresh_selection();
        removed
    }

    pub fn filtered_persons(&self) -> Vec<&Person> {
        self.address_book
            .persons()
            .iter()
            .filter(|p| self.person_filter.test(p))
            .collect()
    }

    pub fn person_filter(&self) -> &PersonPredicate {
        &self.person_filter
    }

    pub fn update_filtered_person_list(&mut self, predicate: PersonPredicate) {
        debug!(?predicate, "updating person filter");
        self.person_filter = predicate;
    }

    // EVENTS:

    pub fn has_event(&self, event: &Event) -> bool {
        self.address_book.has_event(event)
    }

    pub fn add_event(&mut self, event: Event) -> MeetbookResult<()> {
        self.address_book.add_event(event)
    }

    /// Returns true if the person was a participant of the event.
    pub fn remove_person_from_event(&mut self, event: EventId, person: PersonId) -> bool {
        self.address_book
            .event_mut(event)
            .is_some_and(|e| e.remove_person(person))
    }

    /// Visible events, earliest start first.
    pub fn filtered_events(&self) -> Vec<&Event> {
        let mut events: Vec<&Event> = self
            .address_book
            .events()
            .iter()
            .filter(|e| self.event_filter.test(e))
            .collect();
        events.sort_by_key(|e| e.start);
        events
    }

    pub fn event_filter(&self) -> &EventFilter {
        &self.event_filter
    }

    /// Change the visible events. The selection is dropped if the selected
    /// event is no longer visible.
    pub fn update_filtered_event_list(&mut self, filter: EventFilter) {
        debug!(?filter, "updating event filter");
        self.event_filter = filter;
        self.refresh_selection();
    }

    // SELECTION:

    pub fn selected_event(&self) -> Option<&Event> {
        self.selected_event.and_then(|id| self.address_book.event(id))
    }

    /// Select a visible event, or clear the selection with `None`.
    pub fn set_selected_event(&mut self, event: Option<EventId>) -> MeetbookResult<()> {
        if let Some(id) = event {
            if !self.is_visible(id) {
                return Err(MeetbookError::InvalidIndex(
                    MESSAGE_INVALID_EVENT_DISPLAYED_INDEX.to_string(),
                ));
            }
        }
        self.selected_event = event;
        Ok(())
    }

    fn is_visible(&self, id: EventId) -> bool {
        self.address_book
            .event(id)
            .is_some_and(|e| self.event_filter.test(e))
    }

    fn refresh_selection(&mut self) {
        if let Some(id) = self.selected_event {
            if !self.is_visible(id) {
                self.selected_event = None;
            }
        }
    }

    // HISTORY:

    /// Record the current address book as a new history state. Any states
    /// that were undone are discarded.
    pub fn commit_address_book(&mut self) {
        self.history.truncate(self.current_state + 1);
        self.history.push(self.address_book.clone());
        self.current_state += 1;
        info!(state = self.current_state, "committed address book");
    }

    pub fn can_undo(&self) -> bool {
        self.current_state > 0
    }

    pub fn can_redo(&self) -> bool {
        self.current_state + 1 < self.history.len()
    }

    pub fn undo_address_book(&mut self) -> MeetbookResult<()> {
        if !self.can_undo() {
            return Err(MeetbookError::NothingToUndo);
        }
        self.current_state -= 1;
        self.restore_current_state();
        Ok(())
    }

    pub fn redo_address_book(&mut self) -> MeetbookResult<()> {
        if !self.can_redo() {
            return Err(MeetbookError::NothingToRedo);
        }
        self.current_state += 1;
        self.restore_current_state();
        Ok(())
    }

    fn restore_current_state(&mut self) {
        if let Some(state) = self.history.get(self.current_state) {
            self.address_book = state.clone();
        }
        self.person_filter = PersonPredicate::ShowAll;
        self.event_filter = EventFilter::ShowAll;
        self.selected_event = None;
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(AddressBook::default())
    }
}
