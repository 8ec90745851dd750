//! Turning a line of user input into a [`Command`].

pub mod add;
pub mod find;
pub mod meet;
pub mod tokenizer;
pub mod util;

use std::path::PathBuf;

use tracing::debug;

use crate::commands::{
    AddCommand, ClearCommand, Command, DeleteCommand, EventsCommand, ExitCommand, ExportCommand,
    FindCommand, HelpCommand, ImportCommand, ListCommand, MeetCommand, RedoCommand,
    RemindersCommand, SelectCommand, SwitchCommand, UndoCommand,
};
use crate::error::{MeetbookError, MeetbookResult};
use crate::index::Index;
use crate::reminder::{Interval, Unit};
use tokenizer::{tokenize, PREFIX_BLOCK};

/// Parse `COMMAND_WORD ARGS`.
pub fn parse_command(input: &str) -> MeetbookResult<Command> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(MeetbookError::InvalidCommandFormat(
            HelpCommand::MESSAGE_USAGE.to_string(),
        ));
    }

    let (word, args) = match trimmed.split_once(char::is_whitespace) {
        Some((word, args)) => (word, args),
        None => (trimmed, ""),
    };
    debug!(word, args, "parsing command");

    let command = match word {
        AddCommand::COMMAND_WORD => Command::Add(add::parse(args)?),
        ClearCommand::COMMAND_WORD => Command::Clear(ClearCommand),
        DeleteCommand::COMMAND_WORD => {
            Command::Delete(DeleteCommand::new(index_argument(args, DeleteCommand::MESSAGE_USAGE)?))
        }
        EventsCommand::COMMAND_WORD => Command::Events(parse_events(args)?),
        ExitCommand::COMMAND_WORD => Command::Exit(ExitCommand),
        ExportCommand::COMMAND_WORD => {
            Command::Export(ExportCommand::new(path_argument(args, ExportCommand::MESSAGE_USAGE)?))
        }
        FindCommand::COMMAND_WORD => Command::Find(find::parse(args)?),
        HelpCommand::COMMAND_WORD => Command::Help(HelpCommand),
        ImportCommand::COMMAND_WORD => {
            Command::Import(ImportCommand::new(path_argument(args, ImportCommand::MESSAGE_USAGE)?))
        }
        ListCommand::COMMAND_WORD => Command::List(ListCommand),
        MeetCommand::COMMAND_WORD => Command::Meet(meet::parse(args)?),
        RedoCommand::COMMAND_WORD => Command::Redo(RedoCommand),
        RemindersCommand::COMMAND_WORD => Command::Reminders(parse_reminders(args)?),
        SelectCommand::COMMAND_WORD => {
            Command::Select(SelectCommand::new(index_argument(args, SelectCommand::MESSAGE_USAGE)?))
        }
        SwitchCommand::COMMAND_WORD => Command::Switch(SwitchCommand),
        UndoCommand::COMMAND_WORD => Command::Undo(UndoCommand),
        _ => return Err(MeetbookError::UnknownCommand),
    };

    Ok(command)
}

fn index_argument(args: &str, usage: &str) -> MeetbookResult<Index> {
    util::parse_index(args).map_err(|_| MeetbookError::InvalidCommandFormat(usage.to_string()))
}

fn path_argument(args: &str, usage: &str) -> MeetbookResult<PathBuf> {
    let path = args.trim();
    if path.is_empty() {
        return Err(MeetbookError::InvalidCommandFormat(usage.to_string()));
    }
    Ok(PathBuf::from(path))
}

fn parse_events(args: &str) -> MeetbookResult<EventsCommand> {
    let args = tokenize(args, &[PREFIX_BLOCK]);
    if !args.preamble().is_empty() {
        return Err(MeetbookError::InvalidCommandFormat(
            EventsCommand::MESSAGE_USAGE.to_string(),
        ));
    }
    Ok(EventsCommand::new(util::parse_blocks(args.all_values(PREFIX_BLOCK))?))
}

/// `reminders` or `reminders AMOUNT UNIT`.
fn parse_reminders(args: &str) -> MeetbookResult<RemindersCommand> {
    let words: Vec<&str> = args.split_whitespace().collect();
    let window = match words.as_slice() {
        [] => None,
        [amount, unit] => {
            let amount = amount
                .parse::<i64>()
                .ok()
                .filter(|a| *a > 0)
                .ok_or_else(|| {
                    MeetbookError::InvalidCommandFormat(RemindersCommand::MESSAGE_USAGE.to_string())
                })?;
            Some(Interval::new(amount, Unit::parse(unit)?))
        }
        _ => {
            return Err(MeetbookError::InvalidCommandFormat(
                RemindersCommand::MESSAGE_USAGE.to_string(),
            ))
        }
    };
    Ok(RemindersCommand::new(window))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Block;

    #[test]
    fn dispatches_on_first_word() {
        assert_eq!(parse_command("list").unwrap(), Command::List(ListCommand));
        assert_eq!(parse_command("  undo  ").unwrap(), Command::Undo(UndoCommand));
        assert_eq!(
            parse_command("delete 2").unwrap(),
            Command::Delete(DeleteCommand::new(Index::from_one_based(2).unwrap()))
        );
        assert_eq!(
            parse_command("import data/contacts.json").unwrap(),
            Command::Import(ImportCommand::new("data/contacts.json"))
        );
        let meet = parse_command("meet 1 name:x venue:y start:2026-10-20 10:00").unwrap();
        assert_eq!(meet.command_word(), "meet");
    }

    #[test]
    fn unknown_and_empty_input() {
        assert!(matches!(parse_command("unknowncommand"), Err(MeetbookError::UnknownCommand)));
        assert!(matches!(parse_command("LIST"), Err(MeetbookError::UnknownCommand)));
        assert!(matches!(parse_command(""), Err(MeetbookError::InvalidCommandFormat(_))));
    }

    #[test]
    fn bad_index_reports_usage() {
        for input in ["delete", "delete 0", "delete a", "select -1"] {
            assert!(
                matches!(parse_command(input), Err(MeetbookError::InvalidCommandFormat(_))),
                "{input:?}"
            );
        }
    }

    #[test]
    fn events_collects_blocks() {
        let command = parse_command("events block:afternoon block:!12:00 13:00").unwrap();
        let Command::Events(events) = command else {
            panic!("expected events command");
        };
        assert_eq!(events.blocks.len(), 2);
        assert_eq!(events.blocks[0], Block::parse("afternoon").unwrap());
        assert!(events.blocks[1].is_anti());

        assert_eq!(parse_command("events").unwrap(), Command::Events(EventsCommand::default()));
        assert!(matches!(parse_command("events block:teatime"), Err(MeetbookError::Parse(_))));
        assert!(matches!(
            parse_command("events today"),
            Err(MeetbookError::InvalidCommandFormat(_))
        ));
    }

    #[test]
    fn reminders_window_is_optional() {
        assert_eq!(
            parse_command("reminders").unwrap(),
            Command::Reminders(RemindersCommand::default())
        );
        assert_eq!(
            parse_command("reminders 3 HOUR").unwrap(),
            Command::Reminders(RemindersCommand::new(Some(Interval::new(3, Unit::Hour))))
        );
        assert!(matches!(
            parse_command("reminders 0 hour"),
            Err(MeetbookError::InvalidCommandFormat(_))
        ));
        assert!(matches!(parse_command("reminders 3 fortnight"), Err(MeetbookError::Parse(_))));
        assert!(matches!(
            parse_command("reminders soon"),
            Err(MeetbookError::InvalidCommandFormat(_))
        ));
    }

    #[test]
    fn path_is_required() {
        assert!(matches!(parse_command("export  "), Err(MeetbookError::InvalidCommandFormat(_))));
    }
}
