//! Plain text output formatting.
//!
//! Record lines are written unstyled so they stay grep-friendly; status
//! messages use `console` styling.

use crate::error::CliResult;
use crate::types::Record;
use console::style;
use std::io::Write;

/// Write one `[program] command: explanation` line per record.
pub fn write_plain<W: Write>(out: &mut W, records: &[&Record]) -> CliResult<()> {
    for record in records {
        writeln!(out, "{}", record)?;
    }
    Ok(())
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print an info message.
pub fn print_info(msg: &str) {
    eprintln!("{}", style(msg).dim());
}
