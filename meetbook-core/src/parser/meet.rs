//! Arguments of `meet`.

use crate::commands::MeetCommand;
use crate::error::{MeetbookError, MeetbookResult};
use crate::event::{DateTime, Description, EventName, Label, Venue};
use crate::parser::tokenizer::{
    tokenize, PREFIX_DESCRIPTION, PREFIX_END, PREFIX_LABEL, PREFIX_NAME, PREFIX_START,
    PREFIX_VENUE,
};
use crate::parser::util::{parse_indices, require_prefixes, required_value};

pub fn parse(args: &str) -> MeetbookResult<MeetCommand> {
    let usage = MeetCommand::MESSAGE_USAGE;
    let args = tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_DESCRIPTION,
            PREFIX_VENUE,
            PREFIX_START,
            PREFIX_END,
            PREFIX_LABEL,
        ],
    );
    require_prefixes(&args, &[PREFIX_NAME, PREFIX_VENUE, PREFIX_START], usage)?;
    if args.preamble().is_empty() {
        return Err(MeetbookError::InvalidCommandFormat(usage.to_string()));
    }

    let indices = parse_indices(args.preamble())?;
    let name = EventName::parse(required_value(&args, PREFIX_NAME, usage)?)?;
    let venue = Venue::parse(required_value(&args, PREFIX_VENUE, usage)?)?;
    let start = DateTime::parse(required_value(&args, PREFIX_START, usage)?)?;
    let description = Description::parse(args.value(PREFIX_DESCRIPTION).unwrap_or_default())?;
    let end = args.value(PREFIX_END).map(DateTime::parse).transpose()?;
    let label = Label::parse(args.value(PREFIX_LABEL).unwrap_or(MeetCommand::DEFAULT_LABEL))?;

    Ok(MeetCommand {
        indices,
        name,
        description,
        venue,
        start,
        end,
        label,
    })
}
