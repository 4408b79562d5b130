//! # CLI Behavior
//!
//! This is **one possible UI client** for addrbook. It is the only place that
//! knows about terminal I/O, exit codes and output formatting.
//!
//! ## Lifecycle
//!
//! Every invocation runs exactly one command:
//!
//! 1. Resolve the data dir (`$ADDRBOOK_HOME`, else the platform data dir)
//! 2. Read `config.json` and start file logging (failures only warn)
//! 3. Build the API over the configured book file and `load` it
//! 4. Dispatch the command
//! 5. `save` if the command changed anything
//!
//! Running `addrbook` with no arguments lists the first page of contacts.

mod commands;
mod render;
pub mod setup;

pub use commands::run;
