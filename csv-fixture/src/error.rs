use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("CSV Error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("I/O Error: {0}")]
    IoError(#[from] io::Error),
    #[error("A fixture needs at least one row for its header")]
    InvalidRows,
    #[error("A fixture needs at least one column")]
    InvalidColumns,
    #[error("The progress interval must be greater than zero")]
    InvalidProgressInterval,
    #[error("{0:?} cannot be used as a delimiter")]
    InvalidDelimiter(char),
    #[error("Line {line} differs from the generated row: expected {expected:?}, found {found:?}")]
    Mismatch {
        line: usize,
        expected: Vec<String>,
        found: Vec<String>,
    },
    #[error("Expected {expected} rows but the file holds {found}")]
    RowCount { expected: usize, found: usize },
}
