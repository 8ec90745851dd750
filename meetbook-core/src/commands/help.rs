use crate::commands::{CommandContext, CommandResult};
use crate::error::MeetbookResult;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HelpCommand;

impl HelpCommand {
    pub const COMMAND_WORD: &'static str = "help";
    pub const MESSAGE_USAGE: &'static str = "help: Shows program usage instructions.\n\
        Example: help";
    pub const SHOWING_HELP_MESSAGE: &'static str = "Showing help.";

    pub fn execute(&self, _ctx: &mut CommandContext<'_>) -> MeetbookResult<CommandResult> {
        Ok(CommandResult {
            show_help: true,
            ..CommandResult::new(Self::SHOWING_HELP_MESSAGE)
        })
    }
}
