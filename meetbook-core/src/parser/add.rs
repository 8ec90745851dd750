//! Arguments of `add`.

use crate::commands::AddCommand;
use crate::error::{MeetbookError, MeetbookResult};
use crate::parser::tokenizer::{
    tokenize, PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE, PREFIX_PHOTO, PREFIX_TAG,
};
use crate::parser::util::{parse_tags, require_prefixes, required_value};
use crate::person::{Address, Email, Name, Person, Phone, Photo};

pub fn parse(args: &str) -> MeetbookResult<AddCommand> {
    let usage = AddCommand::MESSAGE_USAGE;
    let args = tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_TAG,
            PREFIX_PHOTO,
        ],
    );
    require_prefixes(&args, &[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS], usage)?;
    if !args.preamble().is_empty() {
        return Err(MeetbookError::InvalidCommandFormat(usage.to_string()));
    }

    let person = Person::new(
        Name::parse(required_value(&args, PREFIX_NAME, usage)?)?,
        Phone::parse(required_value(&args, PREFIX_PHONE, usage)?)?,
        Email::parse(required_value(&args, PREFIX_EMAIL, usage)?)?,
        Address::parse(required_value(&args, PREFIX_ADDRESS, usage)?)?,
        parse_tags(args.all_values(PREFIX_TAG))?,
    );
    let person = match args.value(PREFIX_PHOTO) {
        Some(photo) => person.with_photo(Photo::parse(photo)?),
        None => person,
    };

    Ok(AddCommand::new(person))
}
