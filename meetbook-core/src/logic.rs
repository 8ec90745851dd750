//! Runs user input against the model and keeps the data file in step.

use std::sync::Arc;

use chrono::Duration;
use mockable::Clock;
use tracing::{debug, info};

use crate::commands::{CommandContext, CommandResult};
use crate::error::{MeetbookError, MeetbookResult};
use crate::event::DateTime;
use crate::model::Model;
use crate::reminder::{self, Reminder};
use crate::storage::JsonStorage;
use crate::view::ViewState;

/// Owns the model, its storage, the clock and the current view.
pub struct LogicManager {
    model: Model,
    storage: JsonStorage,
    clock: Arc<dyn Clock>,
    view: ViewState,
    reminder_window: Duration,
}

impl LogicManager {
    pub fn new(model: Model, storage: JsonStorage, clock: Arc<dyn Clock>) -> Self {
        LogicManager {
            model,
            storage,
            clock,
            view: ViewState::default(),
            reminder_window: Duration::days(1),
        }
    }

    /// Load the address book from `storage`, starting empty if the file does
    /// not exist yet.
    pub fn open(storage: JsonStorage, clock: Arc<dyn Clock>) -> MeetbookResult<Self> {
        let book = storage.read()?.unwrap_or_default();
        info!(
            path = %storage.path().display(),
            persons = book.persons().len(),
            events = book.events().len(),
            "opened address book"
        );
        Ok(Self::new(Model::new(book), storage, clock))
    }

    pub fn with_reminder_window(mut self, window: std::time::Duration) -> MeetbookResult<Self> {
        self.reminder_window = Duration::from_std(window)
            .map_err(|e| MeetbookError::Config(format!("Invalid reminder window: {e}")))?;
        Ok(self)
    }

    /// Parse and run one line of input. The address book is saved after
    /// every command that succeeds.
    pub fn execute(&mut self, input: &str) -> MeetbookResult<CommandResult> {
        let command = crate::parser::parse_command(input)?;
        debug!(command = command.command_word(), view = %self.view, "executing");

        let mut ctx = CommandContext {
            model: &mut self.model,
            view: self.view,
            clock: self.clock.as_ref(),
            reminder_window: self.reminder_window,
        };
        let result = command.execute(&mut ctx)?;

        if result.switch_view {
            self.view = self.view.toggled();
        }
        self.storage.save(self.model.address_book())?;

        Ok(result)
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn storage(&self) -> &JsonStorage {
        &self.storage
    }

    pub fn now(&self) -> DateTime {
        crate::clock::now(self.clock.as_ref())
    }

    /// Reminders within the configured window, for showing at startup.
    pub fn reminders(&self) -> Vec<Reminder> {
        reminder::upcoming(
            self.model.address_book().events(),
            self.now(),
            self.reminder_window,
        )
    }
}
