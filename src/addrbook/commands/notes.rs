use crate::book::AddressBook;
use crate::error::{BookError, Result};
use crate::model::Note;
use crate::store::SnapshotStore;

use super::{lookup, lookup_mut};

/// Splits user tag input on commas and whitespace, dropping blanks and repeats.
pub fn split_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.split(|c: char| c == ',' || c.is_whitespace()) {
        if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

pub fn add<S: SnapshotStore>(
    book: &mut AddressBook<S>,
    name: &str,
    text: &str,
    tags: &[String],
) -> Result<()> {
    lookup_mut(book, name)?.add_note(text, tags)?;
    Ok(())
}

/// Returns `false` when no note with `old_text` exists.
pub fn edit<S: SnapshotStore>(
    book: &mut AddressBook<S>,
    name: &str,
    old_text: &str,
    new_text: &str,
    tags: Option<&[String]>,
) -> Result<bool> {
    lookup_mut(book, name)?.edit_note(old_text, new_text, tags)
}

pub fn remove<S: SnapshotStore>(book: &mut AddressBook<S>, name: &str, text: &str) -> Result<usize> {
    lookup_mut(book, name)?.remove_note(text)
}

/// Notes of one contact; contacts without note support have none.
pub fn find<'a, S: SnapshotStore>(book: &'a AddressBook<S>, name: &str) -> Result<Vec<&'a Note>> {
    let record = lookup(book, name)?;
    Ok(record.notes().unwrap_or_default().iter().collect())
}

pub fn list<S: SnapshotStore>(book: &AddressBook<S>) -> Vec<(&str, &Note)> {
    book.notes()
}

pub fn by_tag<'a, S: SnapshotStore>(
    book: &'a AddressBook<S>,
    tag: &str,
) -> Result<Vec<(&'a str, &'a Note)>> {
    let tag = tag.trim();
    if tag.is_empty() {
        return Err(BookError::EmptyArgument("tag"));
    }
    Ok(book.notes_by_tag(tag))
}

/// Deletes every note of one contact; returns how many were deleted.
pub fn clear<S: SnapshotStore>(book: &mut AddressBook<S>, name: &str) -> Result<usize> {
    lookup_mut(book, name)?.clear_notes()
}
