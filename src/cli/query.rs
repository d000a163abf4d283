//! Query handlers.
//!
//! Runs the read-only invocations against a loaded store.

use super::OutputFormat;
use crate::error::CliResult;
use crate::output;
use crate::storage::RecordStore;
use crate::types::Record;
use std::io::Write;
use tracing::debug;

/// A read-only request against the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query<'a> {
    /// Every record.
    ListAll,
    /// Distinct program names.
    Programs,
    /// Records of one program.
    ByProgram(&'a str),
    /// Records of one program matching keywords.
    Search { program: &'a str, keywords: &'a str },
}

/// Run a query and write its results to `out`.
///
/// An empty result is not an error; unless `quiet`, a notice goes to stderr.
pub fn run_query<W: Write>(
    store: &RecordStore,
    query: Query<'_>,
    format: OutputFormat,
    quiet: bool,
    out: &mut W,
) -> CliResult<()> {
    let records: Vec<&Record> = match query {
        Query::Programs => {
            for program in store.programs() {
                writeln!(out, "{}", program)?;
            }
            return Ok(());
        }
        Query::ListAll => store.list_all().collect(),
        Query::ByProgram(program) => store.list_by_program(program).collect(),
        Query::Search { program, keywords } => store.search(program, keywords).collect(),
    };

    debug!(matches = records.len(), total = store.len(), "query finished");

    if records.is_empty() && !quiet && format == OutputFormat::Plain {
        output::print_info(&empty_notice(query));
    }

    output::write_records(out, &records, format)
}

fn empty_notice(query: Query<'_>) -> String {
    match query {
        Query::ByProgram(program) => format!("No records for '{}'.", program),
        Query::Search { program, keywords } => {
            format!("No records for '{}' matching '{}'.", program, keywords)
        }
        Query::ListAll | Query::Programs => {
            "No records yet. Use 'halp add' to create one.".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn seeded(dir: &TempDir) -> RecordStore {
        let mut store = RecordStore::load(dir.path().join("config.json")).unwrap();
        store.add(Record::new("git", "git status", "show tree status")).unwrap();
        store.add(Record::new("git", "git log", "show commit history")).unwrap();
        store.add(Record::new("tar", "tar xzf", "extract gzip archive")).unwrap();
        store
    }

    fn run(store: &RecordStore, query: Query<'_>) -> String {
        let mut out = Vec::new();
        run_query(store, query, OutputFormat::Plain, true, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_list_all() {
        let dir = TempDir::new().unwrap();
        let store = seeded(&dir);
        assert_eq!(run(&store, Query::ListAll).lines().count(), 3);
    }

    #[test]
    fn test_by_program() {
        let dir = TempDir::new().unwrap();
        let store = seeded(&dir);
        assert_eq!(
            run(&store, Query::ByProgram("tar")),
            "[tar] tar xzf: extract gzip archive\n"
        );
    }

    #[test]
    fn test_search() {
        let dir = TempDir::new().unwrap();
        let store = seeded(&dir);
        let query = Query::Search {
            program: "git",
            keywords: "log",
        };
        assert_eq!(run(&store, query), "[git] git log: show commit history\n");
    }

    #[test]
    fn test_programs() {
        let dir = TempDir::new().unwrap();
        let store = seeded(&dir);
        assert_eq!(run(&store, Query::Programs), "git\ntar\n");
    }

    #[test]
    fn test_no_match_is_empty_output() {
        let dir = TempDir::new().unwrap();
        let store = seeded(&dir);
        let query = Query::Search {
            program: "svn",
            keywords: "anything",
        };
        assert_eq!(run(&store, query), "");
    }
}
