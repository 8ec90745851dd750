use std::path::PathBuf;

use tracing::{info, warn};

use crate::commands::{CommandContext, CommandResult};
use crate::error::{MeetbookError, MeetbookResult};
use crate::storage::JsonStorage;

/// Merges the contacts of another address book file into this one.
///
/// Events in the file are ignored. Contacts that already exist are skipped;
/// the rest are added one at a time, so a partly duplicate file still
/// brings in everything new.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportCommand {
    pub path: PathBuf,
}

impl ImportCommand {
    pub const COMMAND_WORD: &'static str = "import";
    pub const MESSAGE_USAGE: &'static str =
        "import: Imports contacts using a path to a .json file.\n\
        Parameters: PATH\n\
        Example: import data/contacts.json";
    pub const MESSAGE_SUCCESS: &'static str = "New contacts successfully imported!";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        ImportCommand { path: path.into() }
    }

    pub fn execute(&self, ctx: &mut CommandContext<'_>) -> MeetbookResult<CommandResult> {
        let imported = match JsonStorage::new(&self.path).read() {
            Ok(Some(book)) => book,
            Ok(None) => return Err(MeetbookError::InvalidFile),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "import failed");
                return Err(MeetbookError::InvalidFile);
            }
        };

        let mut added = 0;
        for person in imported.persons() {
            match ctx.model.add_person(person.clone().with_fresh_id()) {
                Ok(()) => added += 1,
                Err(MeetbookError::DuplicatePerson) => {
                    warn!(person = %person.name, "skipping contact already in the address book");
                }
                Err(e) => return Err(e),
            }
        }

        if added > 0 {
            ctx.model.commit_address_book();
        }
        info!(path = %self.path.display(), added, "imported contacts");

        Ok(CommandResult::new(Self::MESSAGE_SUCCESS))
    }
}
