//! Validated string wrappers shared by persons and events.
//!
//! Every field type is a thin newtype around a `String` that can only be
//! constructed through its validator. Serde goes through the same path, so a
//! hand-edited data file with a bad value fails to load instead of smuggling
//! an invalid field into the model.

/// Declare a validated string field.
///
/// `$validator` is a `fn(&str) -> bool` applied to the trimmed input;
/// `$constraints` is the message reported when it rejects a value.
macro_rules! validated_field {
    ($(#[$meta:meta])* $name:ident, $constraints:expr, $validator:expr) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub const MESSAGE_CONSTRAINTS: &'static str = $constraints;

            /// Validate `value` (after trimming) and wrap it.
            pub fn parse(value: &str) -> $crate::error::MeetbookResult<Self> {
                let trimmed = value.trim();
                if !Self::is_valid(trimmed) {
                    return Err($crate::error::MeetbookError::Parse(
                        Self::MESSAGE_CONSTRAINTS.to_string(),
                    ));
                }
                Ok($name(trimmed.to_string()))
            }

            pub fn is_valid(value: &str) -> bool {
                let validator: fn(&str) -> bool = $validator;
                validator(value)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::MeetbookError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::error::MeetbookError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(&value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub(crate) use validated_field;

/// True when `value` has at least one non-whitespace character and does not
/// start with whitespace.
pub(crate) fn is_non_blank(value: &str) -> bool {
    value.chars().next().is_some_and(|c| !c.is_whitespace())
}

/// True when `value` is one or more alphanumeric characters with no spaces.
pub(crate) fn is_alphanumeric_word(value: &str) -> bool {
    !value.is_empty() && value.chars().all(char::is_alphanumeric)
}
