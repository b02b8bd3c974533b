use csv::{ReaderBuilder, StringRecord};
use log::debug;

use crate::config::FixtureConfig;
use crate::error::FixtureError;

/// Reads the file at `config.path` back and checks that it holds exactly the
/// rows `config.table()` generates. Returns the number of rows checked.
///
/// # Errors
/// Errors when the file cannot be read or parsed, when a record differs from
/// the generated row, or when the file holds more or fewer rows than expected
pub fn verify_csv(config: &FixtureConfig) -> Result<usize, FixtureError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(config.delimiter)
        .from_path(&config.path)?;

    let mut table = config.table();
    let expected = table.len();
    let mut record = StringRecord::new();
    let mut found = 0;
    while reader.read_record(&mut record)? {
        found += 1;
        // Past the end of the table only the count matters
        if let Some(row) = table.next() {
            if record.iter().ne(row.iter().map(String::as_str)) {
                return Err(FixtureError::Mismatch {
                    line: found,
                    expected: row,
                    found: record.iter().map(str::to_string).collect(),
                });
            }
        }
    }
    if found != expected {
        return Err(FixtureError::RowCount { expected, found });
    }
    debug!("Verified {} rows in {}", found, config.path.display());
    Ok(found)
}
