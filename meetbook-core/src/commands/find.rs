use crate::commands::{CommandContext, CommandResult};
use crate::error::MeetbookResult;
use crate::person::PersonPredicate;
use crate::view::ViewState;

/// Filters the person list with a predicate built by the find parser.
#[derive(Debug, Clone, PartialEq)]
pub struct FindCommand {
    pub predicate: PersonPredicate,
}

impl FindCommand {
    pub const COMMAND_WORD: &'static str = "find";
    pub const MESSAGE_USAGE: &'static str = "find: Finds all persons whose fields contain any of \
        the given keywords (case-insensitive, whole words) and displays them as a list with \
        index numbers.\n\
        Parameters: KEYWORD [MORE_KEYWORDS]...\n\
        Or, to match every given field: [name:KEYWORDS] [phone:KEYWORDS] [email:KEYWORDS] \
        [address:KEYWORDS] [tag:KEYWORDS]\n\
        Example: find alice bob charlie\n\
        Example: find name:alice tag:friends";

    pub fn new(predicate: PersonPredicate) -> Self {
        FindCommand { predicate }
    }

    pub fn execute(&self, ctx: &mut CommandContext<'_>) -> MeetbookResult<CommandResult> {
        ctx.model.update_filtered_person_list(self.predicate.clone());
        let listed = ctx.model.filtered_persons().len();

        Ok(CommandResult::new(format!("{} persons listed!", listed))
            .showing(ctx.view, ViewState::Persons))
    }
}
