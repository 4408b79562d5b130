//! Versioned, self-describing on-disk representation of the book.

use crate::error::{BookError, Result};
use crate::model::{Note, Record, RecordKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const FORMAT_NAME: &str = "addrbook";
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub format: String,
    pub version: u32,
    pub record_counter: u64,
    pub records: Vec<StoredRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoredKind {
    Contact,
    NoteContact,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub kind: StoredKind,
    pub name: String,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<StoredNote>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredNote {
    pub text: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Snapshot {
    pub fn new<'a>(record_counter: u64, records: impl IntoIterator<Item = &'a Record>) -> Self {
        Self {
            format: FORMAT_NAME.to_string(),
            version: FORMAT_VERSION,
            record_counter,
            records: records.into_iter().map(StoredRecord::from).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| BookError::Io(e.into()))
    }

    /// Parses and checks the header; record contents are checked by [`Snapshot::into_records`].
    pub fn from_json(text: &str) -> Result<Self> {
        let snapshot: Snapshot =
            serde_json::from_str(text).map_err(|e| BookError::CorruptFormat(e.to_string()))?;
        if snapshot.format != FORMAT_NAME {
            return Err(BookError::CorruptFormat(format!(
                "unknown format `{}`",
                snapshot.format
            )));
        }
        if snapshot.version != FORMAT_VERSION {
            return Err(BookError::CorruptFormat(format!(
                "unsupported format version {} (expected {})",
                snapshot.version, FORMAT_VERSION
            )));
        }
        Ok(snapshot)
    }

    /// Rebuilds every record, re-validating each stored value.
    ///
    /// Names are normalized on the way in; two stored names with the same key
    /// make the whole snapshot corrupt.
    pub fn into_records(self) -> Result<Vec<Record>> {
        let mut keys = BTreeSet::new();
        self.records
            .into_iter()
            .map(|stored| {
                let record = Record::try_from(stored)?;
                if !keys.insert(record.key()) {
                    return Err(BookError::CorruptFormat(format!(
                        "duplicate record `{}`",
                        record.name()
                    )));
                }
                Ok(record)
            })
            .collect()
    }
}

impl From<&Record> for StoredRecord {
    fn from(record: &Record) -> Self {
        let kind = match record.kind() {
            RecordKind::Contact => StoredKind::Contact,
            RecordKind::NoteContact => StoredKind::NoteContact,
        };
        Self {
            kind,
            name: record.name().to_string(),
            phones: record.phones().iter().map(|p| p.get().to_string()).collect(),
            address: record.address().map(str::to_string),
            email: record.email().map(str::to_string),
            birthday: record.birthday().map(str::to_string),
            notes: record
                .notes()
                .unwrap_or_default()
                .iter()
                .map(|n| StoredNote {
                    text: n.text().to_string(),
                    created_at: n.created_at(),
                    tags: n.tags().iter().cloned().collect(),
                })
                .collect(),
        }
    }
}

impl TryFrom<StoredRecord> for Record {
    type Error = BookError;

    fn try_from(stored: StoredRecord) -> Result<Self> {
        let name = stored.name;
        if name.trim().is_empty() {
            return Err(BookError::CorruptFormat("record with empty name".into()));
        }
        let corrupt = |err: BookError| BookError::CorruptFormat(format!("record `{name}`: {err}"));

        let mut record = match stored.kind {
            StoredKind::Contact => Record::new(name.clone()),
            StoredKind::NoteContact => Record::with_notes(name.clone()),
        };
        for phone in &stored.phones {
            record.add_phone(phone).map_err(corrupt)?;
        }
        if let Some(address) = &stored.address {
            record.add_address(address);
        }
        if let Some(email) = &stored.email {
            record.add_email(email);
        }
        if let Some(birthday) = &stored.birthday {
            record.add_birthday(birthday).map_err(corrupt)?;
        }
        if stored.kind == StoredKind::Contact && !stored.notes.is_empty() {
            return Err(corrupt(BookError::NotNoteCapable(name.clone())));
        }
        for note in stored.notes {
            let note = Note::restore(&note.text, note.created_at, &note.tags).map_err(corrupt)?;
            record.push_note(note).map_err(corrupt)?;
        }
        Ok(record)
    }
}
