//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every addrbook operation, whatever the UI.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O**: No stdout, stderr or prompts
//! - **Presentation**: Returns records and notes, not strings
//!
//! ## Generic Over SnapshotStore
//!
//! `BookApi<S: SnapshotStore>` is generic over where the book is persisted:
//! - Production: `BookApi<FileStore>`
//! - Testing: `BookApi<InMemoryStore>`
//!
//! The entry point builds one `BookApi`, calls [`BookApi::load`] once at start
//! and [`BookApi::save`] after changes. There is no global book.

use crate::book::AddressBook;
use crate::commands;
use crate::error::Result;
use crate::model::{Note, Record};
use crate::store::fs::FileStore;
use crate::store::SnapshotStore;
use std::num::NonZeroUsize;
use std::path::PathBuf;

pub struct BookApi<S: SnapshotStore> {
    book: AddressBook<S>,
}

impl BookApi<FileStore> {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(AddressBook::open(path))
    }
}

impl<S: SnapshotStore> BookApi<S> {
    pub fn new(book: AddressBook<S>) -> Self {
        Self { book }
    }

    pub fn book(&self) -> &AddressBook<S> {
        &self.book
    }

    // --- contacts ---

    pub fn add_record(&mut self, name: &str) -> Result<&Record> {
        commands::contacts::add(&mut self.book, name, true)
    }

    pub fn add_plain_record(&mut self, name: &str) -> Result<&Record> {
        commands::contacts::add(&mut self.book, name, false)
    }

    pub fn delete_record(&mut self, name: &str) -> Result<Record> {
        commands::contacts::delete(&mut self.book, name)
    }

    pub fn show_record(&self, name: &str) -> Result<&Record> {
        commands::contacts::show(&self.book, name)
    }

    pub fn list_records(&self) -> Vec<&Record> {
        commands::contacts::list(&self.book)
    }

    pub fn page(&self, page_size: NonZeroUsize, page: usize) -> Option<Vec<&Record>> {
        commands::contacts::page(&self.book, page_size, page)
    }

    pub fn page_count(&self, page_size: NonZeroUsize) -> usize {
        commands::contacts::page_count(&self.book, page_size)
    }

    // --- phones and details ---

    pub fn add_phone(&mut self, name: &str, phone: &str) -> Result<()> {
        commands::phones::add(&mut self.book, name, phone)
    }

    pub fn edit_phone(&mut self, name: &str, old: &str, new: &str) -> Result<()> {
        commands::phones::edit(&mut self.book, name, old, new)
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<usize> {
        commands::phones::remove(&mut self.book, name, phone)
    }

    pub fn add_email(&mut self, name: &str, email: &str) -> Result<()> {
        commands::details::set_email(&mut self.book, name, email)
    }

    pub fn add_address(&mut self, name: &str, address: &str) -> Result<()> {
        commands::details::set_address(&mut self.book, name, address)
    }

    pub fn add_birthday(&mut self, name: &str, date: &str) -> Result<()> {
        commands::details::set_birthday(&mut self.book, name, date)
    }

    // --- search and birthdays ---

    pub fn find_by_term(&self, term: &str) -> Result<Vec<&Record>> {
        commands::search::run(&self.book, term)
    }

    pub fn days_to_birthday(&self, name: &str) -> Result<i64> {
        commands::birthdays::days_to_birthday(&self.book, name)
    }

    pub fn birthdays_within(&self, days: i64) -> Vec<(&Record, i64)> {
        commands::birthdays::upcoming(&self.book, days)
    }

    // --- notes ---

    pub fn add_note(&mut self, name: &str, text: &str, tags: &[String]) -> Result<()> {
        commands::notes::add(&mut self.book, name, text, tags)
    }

    pub fn edit_note(
        &mut self,
        name: &str,
        old_text: &str,
        new_text: &str,
        tags: Option<&[String]>,
    ) -> Result<bool> {
        commands::notes::edit(&mut self.book, name, old_text, new_text, tags)
    }

    pub fn remove_note(&mut self, name: &str, text: &str) -> Result<usize> {
        commands::notes::remove(&mut self.book, name, text)
    }

    pub fn find_notes(&self, name: &str) -> Result<Vec<&Note>> {
        commands::notes::find(&self.book, name)
    }

    pub fn list_notes(&self) -> Vec<(&str, &Note)> {
        commands::notes::list(&self.book)
    }

    pub fn notes_by_tag(&self, tag: &str) -> Result<Vec<(&str, &Note)>> {
        commands::notes::by_tag(&self.book, tag)
    }

    pub fn delete_all_notes(&mut self, name: &str) -> Result<usize> {
        commands::notes::clear(&mut self.book, name)
    }

    // --- persistence ---

    pub fn save(&mut self) -> Result<()> {
        commands::persistence::save(&mut self.book)
    }

    pub fn load(&mut self) -> Result<usize> {
        commands::persistence::load(&mut self.book)
    }
}

pub use crate::commands::config::ConfigAction;
