use crate::book::AddressBook;
use crate::error::Result;
use crate::store::SnapshotStore;

use super::lookup_mut;

pub fn add<S: SnapshotStore>(book: &mut AddressBook<S>, name: &str, phone: &str) -> Result<()> {
    lookup_mut(book, name)?.add_phone(phone)
}

pub fn edit<S: SnapshotStore>(
    book: &mut AddressBook<S>,
    name: &str,
    old: &str,
    new: &str,
) -> Result<()> {
    lookup_mut(book, name)?.edit_phone(old, new)
}

/// Returns how many entries were removed (zero is not an error).
pub fn remove<S: SnapshotStore>(book: &mut AddressBook<S>, name: &str, phone: &str) -> Result<usize> {
    Ok(lookup_mut(book, name)?.remove_phone(phone))
}
