//! JSON-based record storage.
//!
//! The whole collection lives in a single JSON array file. It is read once
//! on load and rewritten in full after every append.

use crate::config::Paths;
use crate::error::{CliResult, StoreError, StoreResult};
use crate::types::Record;
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// In-memory record collection bound to its backing file.
///
/// A `RecordStore` only exists once its file has been loaded, so every
/// query and append operates on a loaded collection.
#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    records: Vec<Record>,
}

impl RecordStore {
    /// Load the store from `override_path`, or from the default user
    /// location when none is given.
    pub fn open(override_path: Option<&Path>) -> CliResult<Self> {
        let path = Paths::store_file_or(override_path)?;
        Ok(Self::load(path)?)
    }

    /// Load the store from `path`, creating the file (and its parent
    /// directories) if it does not exist yet.
    ///
    /// An empty file is an empty store. Anything else must parse as a JSON
    /// array of records.
    pub fn load(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        let content = match fs::read(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                OpenOptions::new()
                    .write(true)
                    .create(true)
                    .truncate(false)
                    .open(&path)
                    .map_err(|e| StoreError::io(&path, e))?;
                debug!(path = %path.display(), "created empty record store");
                Vec::new()
            }
            Err(e) => return Err(StoreError::io(&path, e)),
        };

        let records: Vec<Record> = if content.is_empty() {
            Vec::new()
        } else {
            serde_json::from_slice(&content).map_err(|e| StoreError::Format {
                path: path.clone(),
                reason: e.to_string(),
            })?
        };

        debug!(path = %path.display(), count = records.len(), "loaded record store");

        Ok(Self { path, records })
    }

    /// Iterate over every record in insertion order.
    pub fn list_all(&self) -> impl Iterator<Item = &Record> + '_ {
        self.records.iter()
    }

    /// Iterate over the records whose program is exactly `program`.
    pub fn list_by_program<'a>(
        &'a self,
        program: &'a str,
    ) -> impl Iterator<Item = &'a Record> + 'a {
        self.records.iter().filter(move |r| r.program == program)
    }

    /// Iterate over the records of `program` whose command and explanation
    /// contain `keywords`, ignoring case.
    pub fn search<'a>(
        &'a self,
        program: &'a str,
        keywords: &'a str,
    ) -> impl Iterator<Item = &'a Record> + 'a {
        self.records
            .iter()
            .filter(move |r| r.matches(program, keywords))
    }

    /// Distinct program names in the order they first appear.
    pub fn programs(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.program.as_str()) {
                seen.push(&record.program);
            }
        }
        seen
    }

    /// Append a record and rewrite the backing file.
    ///
    /// The record stays in memory even if the write fails.
    pub fn add(&mut self, record: Record) -> StoreResult<()> {
        self.records.push(record);
        self.save()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize the full collection and overwrite the backing file.
    fn save(&self) -> StoreResult<()> {
        let content = serde_json::to_string_pretty(&self.records).map_err(|e| {
            StoreError::Format {
                path: self.path.clone(),
                reason: e.to_string(),
            }
        })?;

        fs::write(&self.path, content).map_err(|e| StoreError::io(&self.path, e))?;

        debug!(path = %self.path.display(), count = self.records.len(), "saved record store");
        Ok(())
    }
}
