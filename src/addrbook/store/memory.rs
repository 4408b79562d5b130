use super::{Snapshot, SnapshotStore};
use crate::error::Result;

/// In-memory storage for testing and development.
/// Does NOT persist data beyond the process.
#[derive(Default)]
pub struct InMemoryStore {
    json: Option<String>,
    writes: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `json`, as if saved by an earlier run.
    pub fn with_json(json: impl Into<String>) -> Self {
        Self {
            json: Some(json.into()),
            writes: 0,
        }
    }

    pub fn json(&self) -> Option<&str> {
        self.json.as_deref()
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl SnapshotStore for InMemoryStore {
    fn read(&self) -> Result<Option<Snapshot>> {
        self.json.as_deref().map(Snapshot::from_json).transpose()
    }

    fn write(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.json = Some(snapshot.to_json()?);
        self.writes += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::book::AddressBook;
    use crate::model::Record;

    pub struct BookFixture {
        pub book: AddressBook<InMemoryStore>,
    }

    impl Default for BookFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BookFixture {
        pub fn new() -> Self {
            Self {
                book: AddressBook::new(InMemoryStore::new()),
            }
        }

        pub fn with_contacts(mut self, count: usize) -> Self {
            for i in 0..count {
                let mut record = Record::with_notes(format!("Contact {}", i + 1));
                record.add_phone(&format!("{:010}", i + 1)).unwrap();
                self.book.add_record(record);
            }
            self
        }

        pub fn with_contact(mut self, name: &str, phone: &str) -> Self {
            let mut record = Record::with_notes(name);
            record.add_phone(phone).unwrap();
            self.book.add_record(record);
            self
        }

        pub fn with_plain_contact(mut self, name: &str) -> Self {
            self.book.add_record(Record::new(name));
            self
        }

        pub fn with_birthday(mut self, name: &str, date: &str) -> Self {
            let mut record = Record::with_notes(name);
            record.add_birthday(date).unwrap();
            self.book.add_record(record);
            self
        }

        pub fn with_note(mut self, name: &str, text: &str, tags: &[&str]) -> Self {
            if self.book.find(name).is_none() {
                self.book.add_record(Record::with_notes(name));
            }
            self.book
                .find_mut(name)
                .unwrap()
                .add_note(text, tags)
                .unwrap();
            self
        }
    }
}
