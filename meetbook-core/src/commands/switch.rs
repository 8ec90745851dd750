use crate::commands::{CommandContext, CommandResult};
use crate::error::MeetbookResult;

/// Toggles between the persons and events views.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SwitchCommand;

impl SwitchCommand {
    pub const COMMAND_WORD: &'static str = "switch";
    pub const MESSAGE_USAGE: &'static str =
        "switch: Switches between the persons and events views.\n\
        Example: switch";

    pub fn execute(&self, ctx: &mut CommandContext<'_>) -> MeetbookResult<CommandResult> {
        Ok(
            CommandResult::new(format!("Switched to the {} view", ctx.view.toggled()))
                .switching_view(true),
        )
    }
}
