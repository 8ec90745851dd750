//! Field types held by a `Person`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::field::{is_non_blank, validated_field};

pub const DEFAULT_PHOTO_PATH: &str = "images/default_person.png";

static EMAIL_LOCAL_PART: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9+_.\-]*[A-Za-z0-9])?$")
        .expect("valid email local-part regex")
});

static EMAIL_DOMAIN_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9\-]*[A-Za-z0-9])?$").expect("valid email domain regex")
});

fn is_valid_person_name(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.is_alphanumeric() => {
            chars.all(|c| c.is_alphanumeric() || c == ' ')
        }
        _ => false,
    }
}

fn is_valid_phone(value: &str) -> bool {
    value.len() >= 3 && value.chars().all(|c| c.is_ascii_digit())
}

fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if !EMAIL_LOCAL_PART.is_match(local) {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    let last_is_long_enough = labels.last().is_some_and(|l| l.len() >= 2);
    last_is_long_enough && labels.iter().all(|l| EMAIL_DOMAIN_LABEL.is_match(l))
}

validated_field!(
    /// A person's full name.
    Name,
    "Names should only contain alphanumeric characters and spaces, and it should not be blank",
    is_valid_person_name
);

validated_field!(
    /// A phone number; digits only.
    Phone,
    "Phone numbers should only contain numbers, and it should be at least 3 digits long",
    is_valid_phone
);

validated_field!(
    Email,
    "Emails should be of the format local-part@domain. The local-part may contain \
     alphanumerics and + _ . - but must not start or end with a special character. \
     The domain is made of labels separated by periods, and its last label must be \
     at least 2 characters long",
    is_valid_email
);

validated_field!(
    Address,
    "Addresses can take any values, and it should not be blank",
    is_non_blank
);

validated_field!(
    /// Path to the picture shown next to a contact.
    Photo,
    "Photo paths can take any values, and it should not be blank",
    is_non_blank
);

impl Default for Photo {
    fn default() -> Self {
        Photo(DEFAULT_PHOTO_PATH.to_string())
    }
}
