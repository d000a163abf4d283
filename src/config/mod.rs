//! Configuration management for halp.
//!
//! Resolves the XDG-compliant location of the record store.

mod paths;

pub use paths::{Paths, STORE_FILE_NAME};
