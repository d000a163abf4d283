//! # halp - A Personal Command Reference
//!
//! halp keeps short notes of the form "for program X, command Y does Z" in a
//! local JSON file and finds them again by program name and keyword.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use halp::storage::RecordStore;
//! use halp::types::Record;
//!
//! let mut store = RecordStore::load("/tmp/halp/config.json").unwrap();
//! store
//!     .add(Record::new("git", "git log", "show commit history"))
//!     .unwrap();
//!
//! for record in store.search("git", "history") {
//!     println!("{}", record);
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - The `Record` entity
//! - [`storage`] - Record persistence and queries
//! - [`config`] - Storage location resolution
//! - [`cli`] - Argument handling and command execution
//! - [`output`] - Output formatting utilities
//! - [`error`] - Error types

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{CliError, StoreError};
pub use storage::RecordStore;
pub use types::Record;
