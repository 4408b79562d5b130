//! # Storage Layer
//!
//! The address book keeps its records in memory and persists them wholesale.
//! A [`SnapshotStore`] is the place a [`Snapshot`] is written to and read back
//! from; the book itself never touches the filesystem.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - One JSON document per book (`address_book.json` by default)
//!   - Written to a temp file and renamed over the target
//!
//! - [`memory::InMemoryStore`]: For testing
//!   - Keeps the serialized JSON text, so the format is still exercised
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "format": "addrbook",
//!   "version": 1,
//!   "record_counter": 2,
//!   "records": [
//!     { "kind": "note_contact", "name": "Anna", "phones": ["0501234567"],
//!       "birthday": "1990-05-01",
//!       "notes": [{ "text": "...", "created_at": "...", "tags": ["work"] }] }
//!   ]
//! }
//! ```
//!
//! The file carries no lock. Two processes sharing one file race on save and the
//! last writer wins.

use crate::error::Result;

pub mod fs;
pub mod memory;
pub mod snapshot;

pub use snapshot::Snapshot;

/// Somewhere a snapshot of the whole book can be kept.
pub trait SnapshotStore {
    /// Reads the persisted snapshot, or `None` if nothing was ever saved.
    fn read(&self) -> Result<Option<Snapshot>>;

    /// Replaces the persisted snapshot entirely.
    fn write(&mut self, snapshot: &Snapshot) -> Result<()>;

    /// Human-readable location, for messages and logs.
    fn describe(&self) -> String;
}
