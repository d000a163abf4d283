//! JSON output formatting.

use crate::error::CliResult;
use crate::types::Record;
use std::io::Write;

/// Write records as a pretty JSON array, the same shape as the store file.
pub fn write_json<W: Write>(out: &mut W, records: &[&Record]) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *out, records)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_matches_store_shape() {
        let record = Record::new("git", "git log", "show commit history");
        let mut buf = Vec::new();
        write_json(&mut buf, &[&record]).unwrap();

        let parsed: Vec<Record> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, vec![record]);
    }

    #[test]
    fn test_json_empty_is_empty_array() {
        let mut buf = Vec::new();
        write_json(&mut buf, &[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[]\n");
    }
}
