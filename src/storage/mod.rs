//! Record persistence.
//!
//! Provides the JSON-backed record store with query capabilities.

mod json_store;

pub use json_store::RecordStore;
