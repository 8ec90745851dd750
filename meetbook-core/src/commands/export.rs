use std::path::PathBuf;

use tracing::{info, warn};

use crate::address_book::AddressBook;
use crate::commands::{CommandContext, CommandResult};
use crate::error::{MeetbookError, MeetbookResult};
use crate::storage::JsonStorage;

/// Writes the displayed persons to an address book file that `import` can
/// read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportCommand {
    pub path: PathBuf,
}

impl ExportCommand {
    pub const COMMAND_WORD: &'static str = "export";
    pub const MESSAGE_USAGE: &'static str =
        "export: Exports the displayed contacts to a .json file.\n\
        Parameters: PATH\n\
        Example: export data/friends.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        ExportCommand { path: path.into() }
    }

    pub fn execute(&self, ctx: &mut CommandContext<'_>) -> MeetbookResult<CommandResult> {
        let mut book = AddressBook::new();
        for person in ctx.model.filtered_persons() {
            book.add_person(person.clone())?;
        }

        JsonStorage::new(&self.path).save(&book).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "export failed");
            MeetbookError::InvalidFile
        })?;

        let exported = book.persons().len();
        info!(path = %self.path.display(), exported, "exported contacts");
        Ok(CommandResult::new(format!(
            "Exported {} contacts to {}",
            exported,
            self.path.display()
        )))
    }
}
