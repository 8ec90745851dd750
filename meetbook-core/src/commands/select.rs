use crate::commands::{CommandContext, CommandResult};
use crate::error::{
    MeetbookError, MeetbookResult, MESSAGE_INVALID_EVENT_DISPLAYED_INDEX,
    MESSAGE_RETRY_IN_EVENTS_VIEW,
};
use crate::index::Index;
use crate::view::ViewState;

/// Selects an event from the displayed event list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectCommand {
    pub index: Index,
}

impl SelectCommand {
    pub const COMMAND_WORD: &'static str = "select";
    pub const MESSAGE_USAGE: &'static str = "select: Selects the event identified by the index \
        number used in the displayed event list.\n\
        Parameters: INDEX (must be a positive integer)\n\
        Example: select 1";

    pub fn new(index: Index) -> Self {
        SelectCommand { index }
    }

    pub fn execute(&self, ctx: &mut CommandContext<'_>) -> MeetbookResult<CommandResult> {
        if ctx.view != ViewState::Events {
            return Err(MeetbookError::wrong_view(MESSAGE_RETRY_IN_EVENTS_VIEW));
        }

        let event = ctx
            .model
            .filtered_events()
            .get(self.index.zero_based())
            .map(|e| e.id)
            .ok_or_else(|| {
                MeetbookError::InvalidIndex(MESSAGE_INVALID_EVENT_DISPLAYED_INDEX.to_string())
            })?;
        ctx.model.set_selected_event(Some(event))?;

        Ok(CommandResult::new(format!("Selected Event: {}", self.index)))
    }
}
