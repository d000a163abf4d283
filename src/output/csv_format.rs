//! CSV output formatting.

use crate::error::CliResult;
use crate::types::Record;
use std::io::Write;

/// Write records in CSV format with a header row.
pub fn write_csv<W: Write>(out: &mut W, records: &[&Record]) -> CliResult<()> {
    let mut wtr = csv::Writer::from_writer(out);

    wtr.write_record(["program", "command", "explanation"])?;

    for record in records {
        wtr.write_record([&record.program, &record.command, &record.explanation])?;
    }

    wtr.flush()?;
    Ok(())
}
