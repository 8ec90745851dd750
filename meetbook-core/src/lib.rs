//! Core of meetbook: contacts, meetings and the command interpreter.
//!
//! - `person`, `event` and `tag` hold the validated domain types
//! - `model` keeps the address book, its history and what is on display
//! - `parser` and `commands` turn a line of input into a change to the model
//! - `logic::LogicManager` ties these together with storage and a clock

pub mod address_book;
pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod event;
mod field;
pub mod index;
pub mod logic;
pub mod model;
pub mod parser;
pub mod person;
pub mod reminder;
pub mod scheduler;
pub mod storage;
pub mod tag;
pub mod view;

pub use address_book::AddressBook;
pub use commands::{Command, CommandResult};
pub use error::{MeetbookError, MeetbookResult};
pub use event::{Event, EventId};
pub use logic::LogicManager;
pub use model::Model;
pub use person::{Person, PersonId};
pub use view::ViewState;
