use crate::commands::{CommandContext, CommandResult};
use crate::error::MeetbookResult;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExitCommand;

impl ExitCommand {
    pub const COMMAND_WORD: &'static str = "exit";
    pub const MESSAGE_USAGE: &'static str = "exit: Exits the program.\n\
        Example: exit";
    pub const MESSAGE_EXIT_ACKNOWLEDGEMENT: &'static str = "Exiting address book as requested ...";

    pub fn execute(&self, _ctx: &mut CommandContext<'_>) -> MeetbookResult<CommandResult> {
        Ok(CommandResult {
            exit: true,
            ..CommandResult::new(Self::MESSAGE_EXIT_ACKNOWLEDGEMENT)
        })
    }
}
