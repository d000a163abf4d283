//! Interactive record entry.
//!
//! Handles the `halp add` flow: three prompts, one line each.

use crate::error::CliResult;
use crate::types::Record;
use std::io::{BufRead, Write};

/// Confirmation printed once a record has been stored.
pub const ADDED_MESSAGE: &str = "Added to library!";

/// Prompt for program, command, and explanation and build a record.
///
/// Only the line ending is stripped from each answer. End of input yields an
/// empty field, and empty fields are accepted.
pub fn prompt_record<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> CliResult<Record> {
    let program = prompt(input, out, "Enter program: ")?;
    let command = prompt(input, out, "Enter command: ")?;
    let explanation = prompt(input, out, "Enter explanation: ")?;

    Ok(Record::new(program, command, explanation))
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> CliResult<String> {
    write!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(line)
}
