//! # Addrbook Architecture
//!
//! Addrbook is a personal contact book: names, phones, address, email and
//! birthday per contact, plus tagged notes on contacts that support them. The
//! crate is a **library with a CLI client**; everything from `api.rs` inward is
//! free of terminal assumptions.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders tables, sets the exit code     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade, one method per user operation               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Normalizes names, resolves contacts, typed errors        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (book.rs, model.rs, field.rs, birthday.rs)            │
//! │  - AddressBook store, Record/Note entities, validation      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - SnapshotStore trait, versioned JSON snapshot             │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never prompts and
//! never exits the process. Failures come back as [`error::BookError`] and leave
//! the record or book they were aimed at unchanged.
//!
//! ## Concurrency
//!
//! One process, one thread, one writer. The book file carries no lock: two
//! processes saving the same file race, and the last save wins.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One function per user operation
//! - [`book`]: The keyed record store, search, batching and persistence hooks
//! - [`model`]: `Record` and `Note`
//! - [`field`]: Validated values (plain, phone, date)
//! - [`birthday`]: Days-until-anniversary arithmetic
//! - [`store`]: Persistence backends and the snapshot format
//! - [`config`]: `config.json` handling
//! - [`logging`]: File logger bootstrap
//! - [`error`]: Error types

pub mod api;
pub mod birthday;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod field;
pub mod logging;
pub mod model;
pub mod store;
