//! Contacts.

mod fields;
pub mod predicate;

pub use fields::{Address, Email, Name, Phone, Photo, DEFAULT_PHOTO_PATH};
pub use predicate::{PersonField, PersonPredicate};

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::tag::Tag;

/// Stable handle for a person. Events refer to their participants by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PersonId(Uuid);

impl PersonId {
    pub fn new() -> Self {
        PersonId(Uuid::new_v4())
    }
}

impl Default for PersonId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A contact in the address book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub id: PersonId,
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
    #[serde(default)]
    pub photo: Photo,
}

impl Person {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Person {
            id: PersonId::new(),
            name,
            phone,
            email,
            address,
            tags,
            photo: Photo::default(),
        }
    }

    pub fn with_photo(mut self, photo: Photo) -> Self {
        self.photo = photo;
        self
    }

    /// The same contact under a fresh id, for bringing people in from another
    /// address book without colliding with ids already in use.
    pub fn with_fresh_id(mut self) -> Self {
        self.id = PersonId::new();
        self
    }

    /// Domain equality used for duplicate detection.
    ///
    /// Two persons are the same contact when their names match and they share
    /// either a phone number or an email address. Ids, address, tags and photo
    /// are ignored.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name && (self.phone == other.phone || self.email == other.email)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Phone: {} Email: {} Address: {} Tags: ",
            self.name, self.phone, self.email, self.address
        )?;
        for tag in &self.tags {
            write!(f, "[{}]", tag)?;
        }
        Ok(())
    }
}
