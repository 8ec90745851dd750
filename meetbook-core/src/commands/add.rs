use tracing::info;

use crate::commands::{CommandContext, CommandResult};
use crate::error::{MeetbookError, MeetbookResult};
use crate::person::Person;

/// Adds a person to the address book.
#[derive(Debug, Clone, PartialEq)]
pub struct AddCommand {
    pub person: Person,
}

impl AddCommand {
    pub const COMMAND_WORD: &'static str = "add";
    pub const MESSAGE_USAGE: &'static str = "add: Adds a person to the address book.\n\
        Parameters: name:NAME phone:PHONE email:EMAIL address:ADDRESS [tag:TAG]... [photo:PATH]\n\
        Example: add name:John Doe phone:98765432 email:johnd@example.com \
        address:311, Clementi Ave 2, #02-25 tag:friends tag:owesMoney";
    pub const MESSAGE_SUCCESS: &'static str = "New person added:";

    pub fn new(person: Person) -> Self {
        AddCommand { person }
    }

    pub fn execute(&self, ctx: &mut CommandContext<'_>) -> MeetbookResult<CommandResult> {
        if ctx.model.has_person(&self.person) {
            return Err(MeetbookError::DuplicatePerson);
        }

        ctx.model.add_person(self.person.clone())?;
        ctx.model.commit_address_book();
        info!(person = %self.person.name, "added person");

        Ok(CommandResult::new(format!("{} {}", Self::MESSAGE_SUCCESS, self.person)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::run;
    use crate::commands::Command;
    use crate::model::Model;
    use crate::person::tests::person;
    use crate::view::ViewState;

    const NOW: &str = "2026-10-20 08:00";

    #[test]
    fn adds_and_commits() {
        let mut model = Model::default();
        let alice = person("Alice Pauline", "94351253", "alice@example.com", &["friends"]);
        let command = Command::Add(AddCommand::new(alice));

        let result = run(&command, &mut model, ViewState::Persons, NOW).unwrap();
        assert!(result.feedback.starts_with("New person added: Alice Pauline"));
        assert_eq!(model.address_book().persons().len(), 1);
        assert!(model.can_undo());
    }

    #[test]
    fn rejects_duplicate() {
        let mut model = Model::default();
        model
            .add_person(person("Alice Pauline", "94351253", "alice@example.com", &[]))
            .unwrap();
        let twin = person("Alice Pauline", "94351253", "other@example.com", &[]);

        let result = run(&Command::Add(AddCommand::new(twin)), &mut model, ViewState::Persons, NOW);
        assert!(matches!(result, Err(MeetbookError::DuplicatePerson)));
        assert!(!model.can_undo());
    }
}
