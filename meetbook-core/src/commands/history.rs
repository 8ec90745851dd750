use tracing::info;

use crate::commands::{CommandContext, CommandResult};
use crate::error::MeetbookResult;

/// Restores the previously committed address book.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UndoCommand;

impl UndoCommand {
    pub const COMMAND_WORD: &'static str = "undo";
    pub const MESSAGE_USAGE: &'static str = "undo: Reverts the last change to the address book.\n\
        Example: undo";
    pub const MESSAGE_SUCCESS: &'static str = "Undo success!";

    pub fn execute(&self, ctx: &mut CommandContext<'_>) -> MeetbookResult<CommandResult> {
        ctx.model.undo_address_book()?;
        info!("undid last change");
        Ok(CommandResult::new(Self::MESSAGE_SUCCESS))
    }
}

/// Re-applies the most recently undone change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RedoCommand;

impl RedoCommand {
    pub const COMMAND_WORD: &'static str = "redo";
    pub const MESSAGE_USAGE: &'static str = "redo: Reapplies the last undone change.\n\
        Example: redo";
    pub const MESSAGE_SUCCESS: &'static str = "Redo success!";

    pub fn execute(&self, ctx: &mut CommandContext<'_>) -> MeetbookResult<CommandResult> {
        ctx.model.redo_address_book()?;
        info!("redid last undone change");
        Ok(CommandResult::new(Self::MESSAGE_SUCCESS))
    }
}
