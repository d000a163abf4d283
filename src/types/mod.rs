//! Core type definitions.
//!
//! A [`Record`] is the only entity halp stores.

mod record;

pub use record::Record;
