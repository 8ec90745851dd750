use tracing::info;

use crate::address_book::AddressBook;
use crate::commands::{CommandContext, CommandResult};
use crate::error::MeetbookResult;
use crate::person::PersonPredicate;

/// Empties the address book.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClearCommand;

impl ClearCommand {
    pub const COMMAND_WORD: &'static str = "clear";
    pub const MESSAGE_USAGE: &'static str = "clear: Deletes every person and event.\n\
        Example: clear";
    pub const MESSAGE_SUCCESS: &'static str = "Address book has been cleared!";

    pub fn execute(&self, ctx: &mut CommandContext<'_>) -> MeetbookResult<CommandResult> {
        ctx.model.reset_data(AddressBook::new());
        ctx.model.update_filtered_person_list(PersonPredicate::ShowAll);
        ctx.model.commit_address_book();
        info!("cleared address book");
        Ok(CommandResult::new(Self::MESSAGE_SUCCESS))
    }
}
