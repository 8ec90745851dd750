//! JSON file storage for address books.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::address_book::AddressBook;
use crate::error::{MeetbookError, MeetbookResult};

/// An address book stored as a single JSON document.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonStorage { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the address book. Returns `Ok(None)` if the file does not exist.
    ///
    /// Invalid field values fail here rather than later, because every field
    /// type validates on deserialization.
    pub fn read(&self) -> MeetbookResult<Option<AddressBook>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no data file yet");
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)?;
        let book = serde_json::from_str(&content).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "could not parse data file");
            MeetbookError::Serialization(format!("{}: {}", self.path.display(), e))
        })?;

        Ok(Some(book))
    }

    pub fn save(&self, book: &AddressBook) -> MeetbookResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(book)
            .map_err(|e| MeetbookError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, content)?;

        debug!(path = %self.path.display(), "saved address book");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::tests::person;

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path().join("nothing.json"));
        assert!(storage.read().unwrap().is_none());
    }

    #[test]
    fn saved_book_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path().join("nested").join("book.json"));

        let mut book = AddressBook::new();
        book.add_person(person("Alice", "94351253", "alice@example.com", &["friends"]))
            .unwrap();
        storage.save(&book).unwrap();

        assert_eq!(storage.read().unwrap(), Some(book));
    }

    #[test]
    fn invalid_field_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(
            &path,
            r#"{"persons":[{"name":"Alice","phone":"not a phone","email":"a@b.co","address":"x"}]}"#,
        )
        .unwrap();

        let result = JsonStorage::new(&path).read();
        assert!(matches!(result, Err(MeetbookError::Serialization(_))));
    }
}
