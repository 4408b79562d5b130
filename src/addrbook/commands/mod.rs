//! # Command Layer
//!
//! One function per user-facing operation. Commands take contact names as the
//! user typed them, normalize them into store keys, and return typed results.
//! They never print; the CLI decides how to present what comes back.

use crate::book::AddressBook;
use crate::error::{BookError, Result};
use crate::model::{normalize_name, Record};
use crate::store::SnapshotStore;

pub mod birthdays;
pub mod config;
pub mod contacts;
pub mod details;
pub mod notes;
pub mod persistence;
pub mod phones;
pub mod search;

/// Normalizes a user-supplied contact name; empty names are rejected.
pub fn name_key(raw: &str) -> Result<String> {
    let key = normalize_name(raw);
    if key.is_empty() {
        return Err(BookError::EmptyArgument("name"));
    }
    Ok(key)
}

pub fn lookup<'a, S: SnapshotStore>(book: &'a AddressBook<S>, name: &str) -> Result<&'a Record> {
    let key = name_key(name)?;
    book.find(&key).ok_or(BookError::NameNotFound(key))
}

pub fn lookup_mut<'a, S: SnapshotStore>(
    book: &'a mut AddressBook<S>,
    name: &str,
) -> Result<&'a mut Record> {
    let key = name_key(name)?;
    book.find_mut(&key).ok_or(BookError::NameNotFound(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::BookFixture;

    #[test]
    fn name_key_rejects_blank_names() {
        assert!(matches!(name_key("   "), Err(BookError::EmptyArgument(_))));
        assert_eq!(name_key(" anna ").unwrap(), "Anna");
    }

    #[test]
    fn lookup_normalizes_before_searching() {
        let book = BookFixture::new().with_contact("Anna", "0501234567").book;
        assert_eq!(lookup(&book, "aNNa").unwrap().name(), "Anna");
        assert!(matches!(
            lookup(&book, "oleg"),
            Err(BookError::NameNotFound(name)) if name == "Oleg"
        ));
    }
}
