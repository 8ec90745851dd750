//! User-invocable commands.
//!
//! Parsing produces a [`Command`]; executing it against a [`CommandContext`]
//! mutates the model and yields a [`CommandResult`] for the front end.

pub mod add;
pub mod clear;
pub mod delete;
pub mod events;
pub mod exit;
pub mod export;
pub mod find;
pub mod help;
pub mod history;
pub mod import;
pub mod list;
pub mod meet;
pub mod reminders;
pub mod select;
pub mod switch;

use chrono::Duration;
use mockable::Clock;

use crate::error::MeetbookResult;
use crate::event::DateTime;
use crate::model::Model;
use crate::view::ViewState;

pub use add::AddCommand;
pub use clear::ClearCommand;
pub use delete::DeleteCommand;
pub use events::EventsCommand;
pub use exit::ExitCommand;
pub use export::ExportCommand;
pub use find::FindCommand;
pub use help::HelpCommand;
pub use history::{RedoCommand, UndoCommand};
pub use import::ImportCommand;
pub use list::ListCommand;
pub use meet::MeetCommand;
pub use reminders::RemindersCommand;
pub use select::SelectCommand;
pub use switch::SwitchCommand;

/// Everything a command may read or change while it runs.
pub struct CommandContext<'a> {
    pub model: &'a mut Model,
    pub view: ViewState,
    pub clock: &'a dyn Clock,
    /// Default look-ahead for `reminders`.
    pub reminder_window: Duration,
}

impl CommandContext<'_> {
    pub fn now(&self) -> DateTime {
        crate::clock::now(self.clock)
    }
}

/// What a command reports back to the front end.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandResult {
    pub feedback: String,
    pub show_help: bool,
    pub exit: bool,
    /// Ask the front end to toggle between the persons and events views.
    pub switch_view: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        CommandResult {
            feedback: feedback.into(),
            ..Default::default()
        }
    }

    pub fn switching_view(mut self, switch: bool) -> Self {
        self.switch_view = switch;
        self
    }

    /// Switch only if the front end is not already showing `target`.
    pub fn showing(self, current: ViewState, target: ViewState) -> Self {
        self.switching_view(current != target)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(AddCommand),
    Clear(ClearCommand),
    Delete(DeleteCommand),
    Events(EventsCommand),
    Exit(ExitCommand),
    Export(ExportCommand),
    Find(FindCommand),
    Help(HelpCommand),
    Import(ImportCommand),
    List(ListCommand),
    Meet(MeetCommand),
    Redo(RedoCommand),
    Reminders(RemindersCommand),
    Select(SelectCommand),
    Switch(SwitchCommand),
    Undo(UndoCommand),
}

impl Command {
    pub fn execute(&self, ctx: &mut CommandContext<'_>) -> MeetbookResult<CommandResult> {
        match self {
            Command::Add(c) => c.execute(ctx),
            Command::Clear(c) => c.execute(ctx),
            Command::Delete(c) => c.execute(ctx),
            Command::Events(c) => c.execute(ctx),
            Command::Exit(c) => c.execute(ctx),
            Command::Export(c) => c.execute(ctx),
            Command::Find(c) => c.execute(ctx),
            Command::Help(c) => c.execute(ctx),
            Command::Import(c) => c.execute(ctx),
            Command::List(c) => c.execute(ctx),
            Command::Meet(c) => c.execute(ctx),
            Command::Redo(c) => c.execute(ctx),
            Command::Reminders(c) => c.execute(ctx),
            Command::Select(c) => c.execute(ctx),
            Command::Switch(c) => c.execute(ctx),
            Command::Undo(c) => c.execute(ctx),
        }
    }

    pub fn command_word(&self) -> &'static str {
        match self {
            Command::Add(_) => AddCommand::COMMAND_WORD,
            Command::Clear(_) => ClearCommand::COMMAND_WORD,
            Command::Delete(_) => DeleteCommand::COMMAND_WORD,
            Command::Events(_) => EventsCommand::COMMAND_WORD,
            Command::Exit(_) => ExitCommand::COMMAND_WORD,
            Command::Export(_) => ExportCommand::COMMAND_WORD,
            Command::Find(_) => FindCommand::COMMAND_WORD,
            Command::Help(_) => HelpCommand::COMMAND_WORD,
            Command::Import(_) => ImportCommand::COMMAND_WORD,
            Command::List(_) => ListCommand::COMMAND_WORD,
            Command::Meet(_) => MeetCommand::COMMAND_WORD,
            Command::Redo(_) => RedoCommand::COMMAND_WORD,
            Command::Reminders(_) => RemindersCommand::COMMAND_WORD,
            Command::Select(_) => SelectCommand::COMMAND_WORD,
            Command::Switch(_) => SwitchCommand::COMMAND_WORD,
            Command::Undo(_) => UndoCommand::COMMAND_WORD,
        }
    }
}

/// Usage text of every command, in the order `help` lists them.
pub fn usages() -> [&'static str; 16] {
    [
        AddCommand::MESSAGE_USAGE,
        ListCommand::MESSAGE_USAGE,
        FindCommand::MESSAGE_USAGE,
        DeleteCommand::MESSAGE_USAGE,
        MeetCommand::MESSAGE_USAGE,
        EventsCommand::MESSAGE_USAGE,
        SelectCommand::MESSAGE_USAGE,
        RemindersCommand::MESSAGE_USAGE,
        ImportCommand::MESSAGE_USAGE,
        ExportCommand::MESSAGE_USAGE,
        UndoCommand::MESSAGE_USAGE,
        RedoCommand::MESSAGE_USAGE,
        ClearCommand::MESSAGE_USAGE,
        SwitchCommand::MESSAGE_USAGE,
        HelpCommand::MESSAGE_USAGE,
        ExitCommand::MESSAGE_USAGE,
    ]
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::clock::tests::FixedClock;

    /// Run `command` against `model` with the clock stopped at `now`.
    pub(crate) fn run(
        command: &Command,
        model: &mut Model,
        view: ViewState,
        now: &str,
    ) -> MeetbookResult<CommandResult> {
        let clock = FixedClock::at(now);
        let mut ctx = CommandContext {
            model,
            view,
            clock: &clock,
            reminder_window: Duration::days(1),
        };
        command.execute(&mut ctx)
    }

    #[test]
    fn showing_switches_only_when_needed() {
        let result = CommandResult::new("ok").showing(ViewState::Persons, ViewState::Events);
        assert!(result.switch_view);
        let result = CommandResult::new("ok").showing(ViewState::Events, ViewState::Events);
        assert!(!result.switch_view);
    }
}
