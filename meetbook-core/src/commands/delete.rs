use tracing::info;

use crate::commands::{CommandContext, CommandResult};
use crate::error::{
    MeetbookError, MeetbookResult, MESSAGE_INVALID_PERSON_DISPLAYED_INDEX,
    MESSAGE_RETRY_IN_PERSONS_VIEW,
};
use crate::event::EventId;
use crate::index::Index;
use crate::model::EventFilter;
use crate::view::ViewState;

/// Deletes a person from the displayed list, taking them out of every
/// event first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    pub index: Index,
}

impl DeleteCommand {
    pub const COMMAND_WORD: &'static str = "delete";
    pub const MESSAGE_USAGE: &'static str = "delete: Deletes the person identified by the index \
        number used in the displayed person list.\n\
        Parameters: INDEX (must be a positive integer)\n\
        Example: delete 1";

    pub fn new(index: Index) -> Self {
        DeleteCommand { index }
    }

    pub fn execute(&self, ctx: &mut CommandContext<'_>) -> MeetbookResult<CommandResult> {
        if ctx.view != ViewState::Persons {
            return Err(MeetbookError::wrong_view(MESSAGE_RETRY_IN_PERSONS_VIEW));
        }

        let target = ctx
            .model
            .filtered_persons()
            .get(self.index.zero_based())
            .map(|p| p.id)
            .ok_or_else(invalid_index)?;

        let shared: Vec<EventId> = ctx
            .model
            .filtered_events()
            .iter()
            .filter(|e| e.has_person(target))
            .map(|e| e.id)
            .collect();

        // Keep the selection pointing at a visible event after each edit.
        for event in shared {
            ctx.model.remove_person_from_event(event, target);
            ctx.model.set_selected_event(None)?;
            ctx.model.update_filtered_event_list(EventFilter::ShowAll);
            ctx.model.set_selected_event(Some(event))?;
        }

        let deleted = ctx.model.delete_person(target).ok_or_else(invalid_index)?;
        ctx.model.commit_address_book();
        info!(person = %deleted.name, "deleted person");

        Ok(CommandResult::new(format!("Deleted Person: {}", deleted)))
    }
}

fn invalid_index() -> MeetbookError {
    MeetbookError::InvalidIndex(MESSAGE_INVALID_PERSON_DISPLAYED_INDEX.to_string())
}
