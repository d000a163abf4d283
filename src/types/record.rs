//! Command-reference records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One stored command-reference entry.
///
/// Records have no identity beyond their field values and are never
/// modified after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Record {
    /// Program the command belongs to (e.g. `git`).
    pub program: String,
    /// The literal command or invocation snippet.
    pub command: String,
    /// Free-text explanation.
    pub explanation: String,
}

impl Record {
    /// Create a new record. Fields are taken verbatim.
    pub fn new(
        program: impl Into<String>,
        command: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            program: program.into(),
            command: command.into(),
            explanation: explanation.into(),
        }
    }

    /// Lowercased `command explanation` text used for keyword matching.
    fn search_text(&self) -> String {
        format!("{} {}", self.command, self.explanation).to_lowercase()
    }

    /// Whether this record belongs to `program` and mentions `keywords`.
    ///
    /// The program comparison is exact and case-sensitive; the keyword test
    /// is a case-insensitive substring match, so empty keywords always match.
    pub fn matches(&self, program: &str, keywords: &str) -> bool {
        self.program == program && self.search_text().contains(&keywords.to_lowercase())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.program, self.command, self.explanation)
    }
}
