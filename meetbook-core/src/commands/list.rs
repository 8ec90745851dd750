use crate::commands::{CommandContext, CommandResult};
use crate::error::MeetbookResult;
use crate::person::PersonPredicate;
use crate::view::ViewState;

/// Shows every person.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListCommand;

impl ListCommand {
    pub const COMMAND_WORD: &'static str = "list";
    pub const MESSAGE_USAGE: &'static str = "list: Lists all persons.\nExample: list";
    pub const MESSAGE_SUCCESS: &'static str = "Listed all persons";

    pub fn execute(&self, ctx: &mut CommandContext<'_>) -> MeetbookResult<CommandResult> {
        ctx.model.update_filtered_person_list(PersonPredicate::ShowAll);
        Ok(CommandResult::new(Self::MESSAGE_SUCCESS).showing(ctx.view, ViewState::Persons))
    }
}
