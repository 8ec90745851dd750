//! Keyword predicates over persons, used by `find` to drive the filtered
//! person view.

use std::fmt;

use crate::person::Person;

/// A searchable field of a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonField {
    Name,
    Phone,
    Email,
    Address,
    Tag,
}

impl PersonField {
    pub const ALL: [PersonField; 5] = [
        PersonField::Name,
        PersonField::Phone,
        PersonField::Email,
        PersonField::Address,
        PersonField::Tag,
    ];
}

impl fmt::Display for PersonField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PersonField::Name => "name",
            PersonField::Phone => "phone",
            PersonField::Email => "email",
            PersonField::Address => "address",
            PersonField::Tag => "tag",
        };
        write!(f, "{}", label)
    }
}

/// A composable filter over persons.
///
/// `Any` of nothing matches nobody and `All` of nothing matches everybody,
/// mirroring the identities of OR and AND.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PersonPredicate {
    #[default]
    ShowAll,
    /// The field contains at least one keyword as a whole word, ignoring case.
    Contains {
        field: PersonField,
        keywords: Vec<String>,
    },
    Any(Vec<PersonPredicate>),
    All(Vec<PersonPredicate>),
}

impl PersonPredicate {
    pub fn contains<I, S>(field: PersonField, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PersonPredicate::Contains {
            field,
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    pub fn test(&self, person: &Person) -> bool {
        match self {
            PersonPredicate::ShowAll => true,
            PersonPredicate::Contains { field, keywords } => keywords
                .iter()
                .any(|keyword| field_contains_word(person, *field, keyword)),
            PersonPredicate::Any(predicates) => predicates.iter().any(|p| p.test(person)),
            PersonPredicate::All(predicates) => predicates.iter().all(|p| p.test(person)),
        }
    }
}

fn field_contains_word(person: &Person, field: PersonField, keyword: &str) -> bool {
    match field {
        PersonField::Name => contains_word_ignore_case(person.name.as_str(), keyword),
        PersonField::Phone => contains_word_ignore_case(person.phone.as_str(), keyword),
        PersonField::Email => contains_word_ignore_case(person.email.as_str(), keyword),
        PersonField::Address => contains_word_ignore_case(person.address.as_str(), keyword),
        PersonField::Tag => person
            .tags
            .iter()
            .any(|tag| contains_word_ignore_case(tag.as_str(), keyword)),
    }
}

/// True when `sentence` has a whitespace-separated token equal to `word`,
/// ignoring case. Only full tokens match: "Ali" does not match "Alice".
pub fn contains_word_ignore_case(sentence: &str, word: &str) -> bool {
    let word = word.trim();
    if word.is_empty() {
        return false;
    }
    let word = word.to_lowercase();
    sentence
        .split_whitespace()
        .any(|token| token.to_lowercase() == word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::tests::person;

    #[test]
    fn word_matching_is_whole_token_and_case_insensitive() {
        assert!(contains_word_ignore_case("Alice Bob", "alice"));
        assert!(contains_word_ignore_case("Alice Bob", "BOB"));
        assert!(!contains_word_ignore_case("Alice Bob", "Ali"));
        assert!(!contains_word_ignore_case("Alice Bob", ""));
        assert!(!contains_word_ignore_case("", "Alice"));
    }

    #[test]
    fn equality_compares_field_and_keywords() {
        let first = PersonPredicate::contains(PersonField::Name, ["first"]);
        let first_copy = PersonPredicate::contains(PersonField::Name, ["first"]);
        let second = PersonPredicate::contains(PersonField::Name, ["first", "second"]);
        let other_field = PersonPredicate::contains(PersonField::Tag, ["first"]);

        assert_eq!(first, first_copy);
        assert_ne!(first, second);
        assert_ne!(first, other_field);
    }

    #[test]
    fn name_contains_keywords() {
        let alice_bob = person("Alice Bob", "12345", "alice@email.com", &[]);

        assert!(PersonPredicate::contains(PersonField::Name, ["Alice"]).test(&alice_bob));
        assert!(PersonPredicate::contains(PersonField::Name, ["Alice", "Bob"]).test(&alice_bob));
        assert!(PersonPredicate::contains(PersonField::Name, ["aLIce", "bOB"]).test(&alice_bob));

        let alice_carol = person("Alice Carol", "12345", "alice@email.com", &[]);
        assert!(PersonPredicate::contains(PersonField::Name, ["Bob", "Carol"]).test(&alice_carol));
    }

    #[test]
    fn name_does_not_contain_keywords() {
        let alice = person("Alice", "12345", "alice@email.com", &["family"]);

        let empty: [&str; 0] = [];
        assert!(!PersonPredicate::contains(PersonField::Name, empty).test(&alice));
        assert!(!PersonPredicate::contains(PersonField::Name, ["Carol"]).test(&alice));

        // keywords that hit every other field but not the name
        let others = PersonPredicate::contains(
            PersonField::Name,
            ["12345", "alice@email.com", "Jurong", "family"],
        );
        assert!(!others.test(&alice));
    }

    #[test]
    fn tag_and_email_fields() {
        let alice = person("Alice", "12345", "alice@email.com", &["family", "friends"]);

        assert!(PersonPredicate::contains(PersonField::Tag, ["FRIENDS"]).test(&alice));
        assert!(!PersonPredicate::contains(PersonField::Tag, ["colleagues"]).test(&alice));
        assert!(PersonPredicate::contains(PersonField::Email, ["alice@email.com"]).test(&alice));
        assert!(!PersonPredicate::contains(PersonField::Email, ["alice"]).test(&alice));
    }

    #[test]
    fn composition_identities() {
        let alice = person("Alice", "12345", "alice@email.com", &[]);
        assert!(!PersonPredicate::Any(vec![]).test(&alice));
        assert!(PersonPredicate::All(vec![]).test(&alice));
        assert!(PersonPredicate::ShowAll.test(&alice));
    }
}
