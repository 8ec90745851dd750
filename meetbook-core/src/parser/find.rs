//! Arguments of `find`.
//!
//! Bare keywords search every field and a person matches if any field holds
//! any keyword. Once the first word carries a field prefix, the input is read
//! as `prefix:keywords` groups instead, and a person must match every group.

use crate::commands::FindCommand;
use crate::error::{MeetbookError, MeetbookResult};
use crate::parser::tokenizer::{
    tokenize, Prefix, PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE, PREFIX_TAG,
};
use crate::person::{PersonField, PersonPredicate};

const FIELD_PREFIXES: [(Prefix, PersonField); 5] = [
    (PREFIX_NAME, PersonField::Name),
    (PREFIX_PHONE, PersonField::Phone),
    (PREFIX_EMAIL, PersonField::Email),
    (PREFIX_ADDRESS, PersonField::Address),
    (PREFIX_TAG, PersonField::Tag),
];

pub fn parse(args: &str) -> MeetbookResult<FindCommand> {
    let trimmed = args.trim();
    if trimmed.is_empty() {
        return Err(MeetbookError::InvalidCommandFormat(
            FindCommand::MESSAGE_USAGE.to_string(),
        ));
    }

    if !first_word_has_prefix(trimmed) {
        let keywords: Vec<&str> = trimmed.split_whitespace().collect();
        let any_field = PersonField::ALL
            .iter()
            .map(|field| PersonPredicate::contains(*field, keywords.iter().copied()))
            .collect();
        return Ok(FindCommand::new(PersonPredicate::Any(any_field)));
    }

    let prefixes: Vec<Prefix> = FIELD_PREFIXES.iter().map(|(p, _)| *p).collect();
    let args = tokenize(trimmed, &prefixes);
    let every_field = FIELD_PREFIXES
        .iter()
        .filter_map(|(prefix, field)| {
            args.value(*prefix)
                .map(|value| PersonPredicate::contains(*field, value.split_whitespace()))
        })
        .collect();

    Ok(FindCommand::new(PersonPredicate::All(every_field)))
}

/// A plain substring test, so `username:bob` also counts as prefixed.
fn first_word_has_prefix(args: &str) -> bool {
    let first = args.split_whitespace().next().unwrap_or_default();
    FIELD_PREFIXES
        .iter()
        .any(|(prefix, _)| first.contains(prefix.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::tests::person;
    use crate::person::Person;

    fn people() -> Vec<Person> {
        vec![
            person("Alice Pauline", "94351253", "alice@example.com", &["friends"]),
            person("Benson Meier", "98765432", "johnd@example.com", &["owesMoney", "friends"]),
            person("Carl Kurz", "95352563", "heinz@example.com", &[]),
        ]
    }

    fn matching(args: &str) -> Vec<String> {
        let predicate = parse(args).unwrap().predicate;
        people()
            .iter()
            .filter(|p| predicate.test(p))
            .map(|p| p.name.to_string())
            .collect()
    }

    #[test]
    fn empty_input_is_a_format_error() {
        assert!(matches!(parse("   "), Err(MeetbookError::InvalidCommandFormat(_))));
    }

    #[test]
    fn bare_keywords_match_any_field() {
        assert_eq!(matching("kurz friends"), ["Alice Pauline", "Benson Meier", "Carl Kurz"]);
        assert_eq!(matching("95352563"), ["Carl Kurz"]);
        assert_eq!(matching("OWESMONEY"), ["Benson Meier"]);
        assert!(matching("Ali").is_empty());
    }

    #[test]
    fn prefixed_groups_must_all_match() {
        assert_eq!(matching("name:alice"), ["Alice Pauline"]);
        assert_eq!(matching("tag:friends"), ["Alice Pauline", "Benson Meier"]);
        assert_eq!(matching("tag:friends name:benson carl"), ["Benson Meier"]);
        assert!(matching("name:carl tag:friends").is_empty());
    }

    #[test]
    fn later_plain_words_do_not_count_as_prefixes() {
        // only the first word is checked, so this is a bare keyword search
        let predicate = parse("carl name:alice").unwrap().predicate;
        assert!(matches!(predicate, PersonPredicate::Any(_)));
    }

    #[test]
    fn prefix_buried_in_first_word_switches_mode() {
        // `xname:` is not an argument, so no group is recognised and the
        // empty conjunction lets everyone through
        let predicate = parse("xname:alice").unwrap().predicate;
        assert_eq!(predicate, PersonPredicate::All(vec![]));
        assert_eq!(matching("xname:alice").len(), 3);
    }
}
