use crate::commands::{CommandContext, CommandResult};
use crate::error::MeetbookResult;
use crate::event::Block;
use crate::model::EventFilter;
use crate::view::ViewState;

/// Shows the events admitted by every given block, or all events.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventsCommand {
    pub blocks: Vec<Block>,
}

impl EventsCommand {
    pub const COMMAND_WORD: &'static str = "events";
    pub const MESSAGE_USAGE: &'static str = "events: Lists events, optionally only those starting \
        within every given time block.\n\
        Parameters: [block:BLOCK]...\n\
        BLOCK is a named block (morning, afternoon, evening, night, midnight, school, breakfast, \
        lunch, dinner, supper, brunch) or HH:MM HH:MM; prefix it with ! to exclude it.\n\
        Example: events block:afternoon block:!lunch";

    pub fn new(blocks: Vec<Block>) -> Self {
        EventsCommand { blocks }
    }

    pub fn execute(&self, ctx: &mut CommandContext<'_>) -> MeetbookResult<CommandResult> {
        let filter = if self.blocks.is_empty() {
            EventFilter::ShowAll
        } else {
            EventFilter::Blocks(self.blocks.clone())
        };
        ctx.model.update_filtered_event_list(filter);
        let listed = ctx.model.filtered_events().len();

        Ok(CommandResult::new(format!("{} events listed!", listed))
            .showing(ctx.view, ViewState::Events))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::run;
    use crate::commands::Command;
    use crate::event::tests::event;
    use crate::model::Model;

    const NOW: &str = "2026-10-20 08:00";

    fn model_with_day() -> Model {
        let mut model = Model::default();
        for (name, start, end) in [
            ("Standup", "2026-10-20 09:00", "2026-10-20 09:30"),
            ("Lunch", "2026-10-20 12:30", "2026-10-20 13:30"),
            ("Review", "2026-10-20 15:00", "2026-10-20 16:00"),
            ("Gig", "2026-10-20 23:30", "2026-10-21 01:00"),
        ] {
            model.add_event(event(name, start, end)).unwrap();
        }
        model
    }

    fn names(model: &Model) -> Vec<&str> {
        model.filtered_events().iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn blocks_are_combined_with_and() {
        let mut model = model_with_day();
        let blocks = vec![Block::parse("afternoon").unwrap(), Block::parse("!lunch").unwrap()];

        let command = Command::Events(EventsCommand::new(blocks));
        let result = run(&command, &mut model, ViewState::Persons, NOW).unwrap();
        assert_eq!(result.feedback, "1 events listed!");
        assert!(result.switch_view);
        assert_eq!(names(&model), ["Review"]);
    }

    #[test]
    fn wrapping_block_matches_late_events() {
        let mut model = model_with_day();
        let blocks = vec![Block::parse("night").unwrap()];
        let command = Command::Events(EventsCommand::new(blocks));
        run(&command, &mut model, ViewState::Events, NOW).unwrap();
        assert_eq!(names(&model), ["Gig"]);
    }

    #[test]
    fn no_blocks_shows_everything() {
        let mut model = model_with_day();
        let morning = vec![Block::parse("morning").unwrap()];
        model.update_filtered_event_list(EventFilter::Blocks(morning));

        let command = Command::Events(EventsCommand::default());
        let result = run(&command, &mut model, ViewState::Events, NOW).unwrap();
        assert_eq!(model.filtered_events().len(), 4);
        assert!(!result.switch_view);
    }
}
