use crate::book::AddressBook;
use crate::error::Result;
use crate::store::SnapshotStore;
use log::warn;

pub fn save<S: SnapshotStore>(book: &mut AddressBook<S>) -> Result<()> {
    book.dump().inspect_err(|err| {
        warn!("event=book_save module=commands status=error error={err}");
    })
}

/// Merges the saved book into memory; returns how many records were read.
pub fn load<S: SnapshotStore>(book: &mut AddressBook<S>) -> Result<usize> {
    book.load().inspect_err(|err| {
        warn!("event=book_load module=commands status=error error={err}");
    })
}
