//! Error types for meetbook.

use thiserror::Error;

pub const MESSAGE_INVALID_PERSON_DISPLAYED_INDEX: &str = "The person index provided is invalid";
pub const MESSAGE_INVALID_EVENT_DISPLAYED_INDEX: &str = "The event index provided is invalid";
pub const MESSAGE_WRONG_VIEW: &str = "This command is not available in the current view";
pub const MESSAGE_RETRY_IN_PERSONS_VIEW: &str =
    "Switch to the persons view with `switch` and try again";
pub const MESSAGE_RETRY_IN_EVENTS_VIEW: &str =
    "Switch to the events view with `switch` and try again";

/// Errors that can occur while parsing or executing a command.
///
/// The `Display` output of every variant is the message shown to the user.
#[derive(Error, Debug)]
pub enum MeetbookError {
    #[error("{0}")]
    InvalidIndex(String),

    #[error("Invalid command format!\n{0}")]
    InvalidCommandFormat(String),

    #[error("Unknown command")]
    UnknownCommand,

    #[error("{0}")]
    WrongView(String),

    #[error("This person already exists in the address book")]
    DuplicatePerson,

    #[error("Operation would result in similar events. Change parameters and run command again.")]
    DuplicateEvent,

    #[error("Please input a valid file path")]
    InvalidFile,

    #[error("{0}")]
    Parse(String),

    #[error("No more commands to undo!")]
    NothingToUndo,

    #[error("No more commands to redo!")]
    NothingToRedo,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl MeetbookError {
    pub fn wrong_view(retry_hint: &str) -> Self {
        MeetbookError::WrongView(format!("{}. {}", MESSAGE_WRONG_VIEW, retry_hint))
    }
}

/// Result type alias for meetbook operations.
pub type MeetbookResult<T> = Result<T, MeetbookError>;
