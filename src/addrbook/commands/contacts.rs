use crate::book::AddressBook;
use crate::error::{BookError, Result};
use crate::model::Record;
use crate::store::SnapshotStore;
use log::info;
use std::num::NonZeroUsize;

use super::{lookup, name_key};

/// Creates a contact. Note-capable unless `with_notes` is false.
pub fn add<'a, S: SnapshotStore>(
    book: &'a mut AddressBook<S>,
    name: &str,
    with_notes: bool,
) -> Result<&'a Record> {
    let key = name_key(name)?;
    if book.contains(&key) {
        return Err(BookError::AlreadyExists(format!("contact {key}")));
    }

    let record = if with_notes {
        Record::with_notes(key.clone())
    } else {
        Record::new(key.clone())
    };
    book.add_record(record);
    info!("event=contact_add module=commands status=ok notes={with_notes}");
    book.find(&key).ok_or(BookError::NameNotFound(key))
}

pub fn delete<S: SnapshotStore>(book: &mut AddressBook<S>, name: &str) -> Result<Record> {
    let key = name_key(name)?;
    book.delete(&key).ok_or(BookError::NameNotFound(key))
}

pub fn show<'a, S: SnapshotStore>(book: &'a AddressBook<S>, name: &str) -> Result<&'a Record> {
    lookup(book, name)
}

pub fn list<S: SnapshotStore>(book: &AddressBook<S>) -> Vec<&Record> {
    book.records().collect()
}

/// One page of the listing, 1-based; `None` past the last page.
pub fn page<S: SnapshotStore>(
    book: &AddressBook<S>,
    page_size: NonZeroUsize,
    page: usize,
) -> Option<Vec<&Record>> {
    book.iterator(page_size).nth(page.checked_sub(1)?)
}

pub fn page_count<S: SnapshotStore>(book: &AddressBook<S>, page_size: NonZeroUsize) -> usize {
    book.len().div_ceil(page_size.get())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecordKind;
    use crate::store::memory::fixtures::BookFixture;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn add_normalizes_and_creates_note_contact() {
        let mut book = BookFixture::new().book;
        let record = add(&mut book, "  anna ", true).unwrap();
        assert_eq!(record.name(), "Anna");
        assert_eq!(record.kind(), RecordKind::NoteContact);
        assert!(book.find("Anna").is_some());
    }

    #[test]
    fn add_plain_contact() {
        let mut book = BookFixture::new().book;
        let record = add(&mut book, "oleg", false).unwrap();
        assert_eq!(record.kind(), RecordKind::Contact);
    }

    #[test]
    fn add_existing_name_fails_and_keeps_record() {
        let mut book = BookFixture::new().with_contact("Anna", "0501234567").book;
        assert!(matches!(
            add(&mut book, "ANNA", true),
            Err(BookError::AlreadyExists(_))
        ));
        assert!(book.find("Anna").unwrap().find_phone("0501234567").is_some());
    }

    #[test]
    fn add_blank_name_fails() {
        let mut book = BookFixture::new().book;
        assert!(matches!(
            add(&mut book, " ", true),
            Err(BookError::EmptyArgument(_))
        ));
        assert!(book.is_empty());
    }

    #[test]
    fn delete_missing_contact_fails() {
        let mut book = BookFixture::new().with_contact("Anna", "0501234567").book;
        assert!(matches!(
            delete(&mut book, "oleg"),
            Err(BookError::NameNotFound(_))
        ));
        assert_eq!(delete(&mut book, "anna").unwrap().name(), "Anna");
        assert!(book.is_empty());
    }

    #[test]
    fn list_is_in_name_order() {
        let book = BookFixture::new()
            .with_contact("Oleg", "0991234567")
            .with_contact("Anna", "0501234567")
            .book;
        let names: Vec<&str> = list(&book).into_iter().map(Record::name).collect();
        assert_eq!(names, vec!["Anna", "Oleg"]);
    }

    #[test]
    fn pages_cover_all_records() {
        let book = BookFixture::new().with_contacts(5).book;
        assert_eq!(page_count(&book, size(2)), 3);
        assert_eq!(page(&book, size(2), 1).unwrap().len(), 2);
        assert_eq!(page(&book, size(2), 3).unwrap().len(), 1);
        assert!(page(&book, size(2), 4).is_none());
        assert!(page(&book, size(2), 0).is_none());
    }
}
