//! Command-line interface definitions and handlers.
//!
//! halp is driven by positional words rather than subcommands:
//! - `halp` - list every record
//! - `halp add` - add a record interactively
//! - `halp <program>` - list the records of one program
//! - `halp <program> <keywords>...` - search a program's records

mod add;
mod query;

pub use add::{prompt_record, ADDED_MESSAGE};
pub use query::{run_query, Query};

use crate::error::CliResult;
use crate::storage::RecordStore;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

/// halp - a personal command-reference lookup tool.
///
/// Stores short notes about commands and finds them again by program name
/// and keyword.
#[derive(Parser, Debug)]
#[command(name = "halp")]
#[command(author = "HueCodes <huecodes@proton.me>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A personal command-reference lookup tool", long_about = None)]
pub struct Cli {
    /// `add`, a program name, or a program name followed by keywords
    #[arg(value_name = "WORDS", num_args = 1.., trailing_var_arg = true)]
    pub words: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to the record store file
    #[arg(long, env = "HALP_STORE", value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Output format for records
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,

    /// List the distinct program names instead of records
    #[arg(long)]
    pub programs: bool,
}

/// What a command line asks halp to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Print every record.
    ListAll,
    /// Print the distinct program names.
    Programs,
    /// Prompt for and store a new record.
    Add,
    /// Print the records of one program.
    ByProgram(String),
    /// Print the records of one program matching keywords.
    Search { program: String, keywords: String },
}

impl Invocation {
    /// Map positional words to an invocation.
    ///
    /// Keywords are the words after the program, joined by single spaces
    /// and lowercased.
    pub fn from_words(words: &[String]) -> Self {
        match words {
            [] => Self::ListAll,
            [first, ..] if first == "add" => Self::Add,
            [program] => Self::ByProgram(program.clone()),
            [program, rest @ ..] => Self::Search {
                program: program.clone(),
                keywords: rest.join(" ").to_lowercase(),
            },
        }
    }
}

impl Invocation {
    /// The read-only query this invocation runs, or `None` for `Add`.
    pub fn query(&self) -> Option<Query<'_>> {
        match self {
            Self::ListAll => Some(Query::ListAll),
            Self::Programs => Some(Query::Programs),
            Self::ByProgram(program) => Some(Query::ByProgram(program)),
            Self::Search { program, keywords } => Some(Query::Search { program, keywords }),
            Self::Add => None,
        }
    }
}

impl Cli {
    /// Resolve the invocation described by this command line.
    pub fn invocation(&self) -> Invocation {
        if self.programs {
            return Invocation::Programs;
        }
        Invocation::from_words(&self.words)
    }

    /// Load the store and run against the process's stdin and stdout.
    pub fn execute(&self) -> CliResult<()> {
        let mut store = RecordStore::open(self.store.as_deref())?;

        let stdin = io::stdin();
        let stdout = io::stdout();
        self.execute_with(&mut store, &mut stdin.lock(), &mut stdout.lock())
    }

    /// Run against an already loaded store and explicit streams.
    pub fn execute_with<R: BufRead, W: Write>(
        &self,
        store: &mut RecordStore,
        input: &mut R,
        out: &mut W,
    ) -> CliResult<()> {
        let invocation = self.invocation();
        debug!(?invocation, "dispatching");

        match invocation.query() {
            Some(query) => run_query(store, query, self.format, self.quiet, out),
            None => {
                let record = prompt_record(input, out)?;
                store.add(record)?;
                if !self.quiet {
                    writeln!(out, "{}", console::style(ADDED_MESSAGE).green())?;
                }
                Ok(())
            }
        }
    }
}

/// Output format for records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `[program] command: explanation` lines
    #[default]
    Plain,
    /// JSON array, same shape as the store file
    Json,
    /// CSV with a header row
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}
