use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::commands::{CommandContext, CommandResult};
use crate::error::{MeetbookError, MeetbookResult, MESSAGE_INVALID_PERSON_DISPLAYED_INDEX};
use crate::event::{DateTime, Description, Event, EventName, Label, Venue};
use crate::index::Index;
use crate::model::EventFilter;
use crate::person::PersonId;
use crate::scheduler;
use crate::view::ViewState;

/// Books a meeting with some of the displayed persons, moving it later until
/// it clears every event those persons already have.
#[derive(Debug, Clone, PartialEq)]
pub struct MeetCommand {
    pub indices: BTreeSet<Index>,
    pub name: EventName,
    pub description: Description,
    pub venue: Venue,
    pub start: DateTime,
    /// Parsed but unused: meetings always run for the fixed meeting length.
    pub end: Option<DateTime>,
    pub label: Label,
}

impl MeetCommand {
    pub const COMMAND_WORD: &'static str = "meet";
    pub const MESSAGE_USAGE: &'static str = "meet: Plans a meeting with contacts.\n\
        Parameters: INDEX [MORE_INDICES]... name:NAME venue:VENUE start:START \
        [desc:DESCRIPTION] [end:END] [label:LABEL]\n\
        Example: meet 1 4 5 name:Project sync venue:COM1 #02-10 start:2026-10-20 14:00:00";
    pub const MESSAGE_SUCCESS: &'static str = "New meeting event successfully created";
    pub const DEFAULT_LABEL: &'static str = "meeting";

    pub fn execute(&self, ctx: &mut CommandContext<'_>) -> MeetbookResult<CommandResult> {
        let participants = self.resolve_participants(ctx)?;

        let (start, end) = scheduler::initial_slot(self.start, ctx.now())?;
        if let Some(requested_end) = self.end {
            debug!(%requested_end, %end, "meeting length is fixed, ignoring requested end");
        }

        let candidate = Event::new(
            self.name.clone(),
            self.description.clone(),
            self.venue.clone(),
            start,
            end,
            self.label.clone(),
        );
        let clashing = ctx
            .model
            .address_book()
            .events()
            .iter()
            .filter(|e| e.has_any_person(&participants));
        let mut meeting = scheduler::resolve_conflicts(candidate, clashing)?;
        meeting.add_persons(participants);

        if ctx.model.has_event(&meeting) {
            return Err(MeetbookError::DuplicateEvent);
        }

        let id = meeting.id;
        let summary = meeting.to_string();
        ctx.model.add_event(meeting)?;
        ctx.model.update_filtered_event_list(EventFilter::ShowAll);
        ctx.model.set_selected_event(Some(id))?;
        ctx.model.commit_address_book();
        info!(meeting = %summary, "booked meeting");

        Ok(CommandResult::new(format!("{} {}", Self::MESSAGE_SUCCESS, summary))
            .showing(ctx.view, ViewState::Events))
    }

    /// Map indices onto the displayed persons, failing before anything changes.
    fn resolve_participants(&self, ctx: &CommandContext<'_>) -> MeetbookResult<Vec<PersonId>> {
        let shown = ctx.model.filtered_persons();
        self.indices
            .iter()
            .map(|index| {
                shown.get(index.zero_based()).map(|p| p.id).ok_or_else(|| {
                    MeetbookError::InvalidIndex(MESSAGE_INVALID_PERSON_DISPLAYED_INDEX.to_string())
                })
            })
            .collect()
    }
}
