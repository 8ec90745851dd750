//! Tags attached to persons.

use crate::field::{is_alphanumeric_word, validated_field};

validated_field!(
    /// A single-word label such as `friends` or `colleagues`.
    Tag,
    "Tags names should be alphanumeric",
    is_alphanumeric_word
);
