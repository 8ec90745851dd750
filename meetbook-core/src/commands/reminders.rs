use chrono::Duration;

use crate::commands::{CommandContext, CommandResult};
use crate::error::{MeetbookError, MeetbookResult};
use crate::event::DateTime;
use crate::reminder::{self, Interval};

/// Lists events starting soon.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RemindersCommand {
    /// How far ahead to look; the configured window when absent.
    pub window: Option<Interval>,
}

impl RemindersCommand {
    pub const COMMAND_WORD: &'static str = "reminders";
    pub const MESSAGE_USAGE: &'static str = "reminders: Lists events starting within the given \
        time from now.\n\
        Parameters: [AMOUNT UNIT] (UNIT is one of min, hour, day, week, month, year)\n\
        Example: reminders 3 hour";
    pub const MESSAGE_NONE: &'static str = "No upcoming events";

    pub fn new(window: Option<Interval>) -> Self {
        RemindersCommand { window }
    }

    pub fn execute(&self, ctx: &mut CommandContext<'_>) -> MeetbookResult<CommandResult> {
        let now = ctx.now();
        let window = match self.window {
            Some(interval) => Self::explicit_window(interval, now)?,
            None => ctx.reminder_window,
        };
        let due = reminder::upcoming(ctx.model.address_book().events(), now, window);

        if due.is_empty() {
            return Ok(CommandResult::new(Self::MESSAGE_NONE));
        }

        let lines: Vec<String> = due.iter().map(|r| r.message.clone()).collect();
        Ok(CommandResult::new(format!(
            "{} upcoming events:\n{}",
            due.len(),
            lines.join("\n")
        )))
    }

    /// An explicit window has to end inside the calendar.
    fn explicit_window(interval: Interval, now: DateTime) -> MeetbookResult<Duration> {
        interval
            .duration()
            .filter(|window| now.plus(*window).is_ok())
            .ok_or_else(|| MeetbookError::InvalidCommandFormat(Self::MESSAGE_USAGE.to_string()))
    }
}
