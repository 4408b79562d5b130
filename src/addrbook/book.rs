//! The address book: a keyed collection of records with search and persistence.
//!
//! Records are keyed by their normalized name (see [`crate::model::normalize_name`]) and kept
//! in key order. Persistence is wholesale: [`AddressBook::dump`] replaces the
//! stored snapshot, [`AddressBook::load`] merges a stored snapshot into memory.

use crate::birthday;
use crate::error::Result;
use crate::model::{Note, Record};
use crate::store::fs::FileStore;
use crate::store::{Snapshot, SnapshotStore};
use chrono::NaiveDate;
use log::{debug, info};
use std::collections::btree_map::{self, BTreeMap};
use std::num::NonZeroUsize;
use std::path::PathBuf;

pub struct AddressBook<S: SnapshotStore> {
    entries: BTreeMap<String, Record>,
    record_counter: u64,
    store: S,
}

impl AddressBook<FileStore> {
    /// An empty book backed by the JSON file at `path`. Nothing is read yet.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(FileStore::new(path))
    }
}

impl<S: SnapshotStore> AddressBook<S> {
    pub fn new(store: S) -> Self {
        Self {
            entries: BTreeMap::new(),
            record_counter: 0,
            store,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// How many records were ever added; survives save and load.
    pub fn record_counter(&self) -> u64 {
        self.record_counter
    }

    /// Inserts under the record's normalized name, replacing any existing entry.
    ///
    /// Returns the replaced record, if any.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.key();
        self.record_counter = self.record_counter.saturating_add(1);
        let replaced = self.entries.insert(key, record);
        if replaced.is_some() {
            debug!("event=record_replace module=book status=ok");
        }
        replaced
    }

    /// Exact-key lookup.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.entries.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.entries.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Removes the entry if present.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.entries.remove(name)
    }

    /// All records in key order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.entries.values()
    }

    /// Records with a phone containing `term`, or a name containing it
    /// case-insensitively. Each record appears at most once, in key order.
    pub fn find_by_term(&self, term: &str) -> Vec<&Record> {
        let term_lower = term.to_lowercase();
        self.entries
            .values()
            .filter(|record| {
                record.phones().iter().any(|p| p.get().contains(term))
                    || record.name().to_lowercase().contains(&term_lower)
            })
            .collect()
    }

    /// Splits the records into batches of `batch_size`, in key order.
    ///
    /// The last batch holds the remainder and may be shorter.
    pub fn iterator(&self, batch_size: NonZeroUsize) -> Batches<'_> {
        Batches {
            records: self.entries.values(),
            size: batch_size.get(),
        }
    }

    /// Every note in the book with its owner's name, owners in key order.
    pub fn notes(&self) -> Vec<(&str, &Note)> {
        self.entries
            .values()
            .filter_map(|record| record.notes().map(|notes| (record.name(), notes)))
            .flat_map(|(owner, notes)| notes.iter().map(move |note| (owner, note)))
            .collect()
    }

    pub fn notes_by_tag(&self, tag: &str) -> Vec<(&str, &Note)> {
        self.notes()
            .into_iter()
            .filter(|(_, note)| note.has_tag(tag))
            .collect()
    }

    /// Records whose next birthday is at most `days` away, nearest first.
    pub fn birthdays_within(&self, days: i64, today: NaiveDate) -> Vec<(&Record, i64)> {
        let mut upcoming: Vec<(&Record, i64)> = self
            .entries
            .values()
            .filter_map(|record| {
                let date = record.birthday_date()?;
                let left = birthday::days_until_next(date, today);
                (left <= days).then_some((record, left))
            })
            .collect();
        upcoming.sort_by_key(|(_, left)| *left);
        upcoming
    }

    /// Writes the whole book to the backing store, replacing what was there.
    pub fn dump(&mut self) -> Result<()> {
        let snapshot = Snapshot::new(self.record_counter, self.entries.values());
        self.store.write(&snapshot)?;
        info!(
            "event=book_dump module=book status=ok records={} target={}",
            self.entries.len(),
            self.store.describe()
        );
        Ok(())
    }

    /// Merges the stored book into memory.
    ///
    /// Entries only in memory are kept; entries in both are replaced by the
    /// stored version. Nothing changes if the snapshot cannot be read in full.
    /// Returns how many records were read.
    pub fn load(&mut self) -> Result<usize> {
        let Some(snapshot) = self.store.read()? else {
            debug!(
                "event=book_load module=book status=skipped reason=missing target={}",
                self.store.describe()
            );
            return Ok(0);
        };
        let stored_counter = snapshot.record_counter;
        let records = snapshot.into_records()?;
        let count = records.len();

        for record in records {
            self.entries.insert(record.key(), record);
        }
        self.record_counter = self.record_counter.max(stored_counter);

        info!(
            "event=book_load module=book status=ok records={} target={}",
            count,
            self.store.describe()
        );
        Ok(count)
    }
}

/// Fixed-size batches of records; see [`AddressBook::iterator`].
pub struct Batches<'a> {
    records: btree_map::Values<'a, String, Record>,
    size: usize,
}

impl<'a> Iterator for Batches<'a> {
    type Item = Vec<&'a Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let batch: Vec<&'a Record> = self.records.by_ref().take(self.size).collect();
        if batch.is_empty() {
            None
        } else {
            Some(batch)
        }
    }
}
