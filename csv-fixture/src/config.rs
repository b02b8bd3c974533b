use std::path::PathBuf;

use csv::Terminator;

use crate::error::FixtureError;
use crate::table::SampleTable;

pub const DEFAULT_ROWS: usize = 5000;
pub const DEFAULT_COLUMNS: usize = 1000;
pub const DEFAULT_PATH: &str = "files/csv/big.csv";
pub const DEFAULT_PROGRESS_INTERVAL: usize = 1000;
pub const DEFAULT_DELIMITER: u8 = b',';

/// Record terminator written after every row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineTerminator {
    #[default]
    Lf,
    Crlf,
}

impl From<LineTerminator> for Terminator {
    fn from(terminator: LineTerminator) -> Self {
        match terminator {
            LineTerminator::Lf => Terminator::Any(b'\n'),
            LineTerminator::Crlf => Terminator::CRLF,
        }
    }
}

/// Everything a single fixture run needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureConfig {
    /// Total rows, header included
    pub rows: usize,
    pub columns: usize,
    pub path: PathBuf,
    /// Report progress every time this many rows have been written
    pub progress_interval: usize,
    pub delimiter: u8,
    pub terminator: LineTerminator,
    /// Create missing parent directories of `path` instead of failing
    pub create_dirs: bool,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        FixtureConfig {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            path: PathBuf::from(DEFAULT_PATH),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            delimiter: DEFAULT_DELIMITER,
            terminator: LineTerminator::default(),
            create_dirs: false,
        }
    }
}

impl FixtureConfig {
    #[must_use]
    pub fn new(rows: usize, columns: usize, path: impl Into<PathBuf>) -> Self {
        FixtureConfig {
            rows,
            columns,
            path: path.into(),
            ..FixtureConfig::default()
        }
    }

    /// # Errors
    /// Errors when the configuration cannot produce a readable fixture:
    /// 1. `rows` is zero, leaving no room for the header
    /// 2. `columns` is zero
    /// 3. `progress_interval` is zero
    /// 4. `delimiter` is not ASCII or collides with quoting or line breaks
    pub fn validate(&self) -> Result<(), FixtureError> {
        if self.rows == 0 {
            return Err(FixtureError::InvalidRows);
        }
        if self.columns == 0 {
            return Err(FixtureError::InvalidColumns);
        }
        if self.progress_interval == 0 {
            return Err(FixtureError::InvalidProgressInterval);
        }
        if !self.delimiter.is_ascii() || matches!(self.delimiter, b'"' | b'\r' | b'\n') {
            return Err(FixtureError::InvalidDelimiter(char::from(self.delimiter)));
        }
        Ok(())
    }

    /// The table this configuration describes
    #[must_use]
    pub fn table(&self) -> SampleTable {
        SampleTable::new(self.rows, self.columns)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_default_matches_big_fixture() {
        let config = FixtureConfig::default();
        assert_eq!(config.rows, 5000);
        assert_eq!(config.columns, 1000);
        assert_eq!(config.path, PathBuf::from("files/csv/big.csv"));
        assert_eq!(config.progress_interval, 1000);
        assert_eq!(config.delimiter, b',');
        assert_eq!(config.terminator, LineTerminator::Lf);
        assert!(!config.create_dirs);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_new_keeps_other_defaults() {
        let config = FixtureConfig::new(3, 2, "out.csv");
        assert_eq!(config.rows, 3);
        assert_eq!(config.columns, 2);
        assert_eq!(config.path, PathBuf::from("out.csv"));
        assert_eq!(config.progress_interval, DEFAULT_PROGRESS_INTERVAL);
        assert_eq!(config.table().len(), 3);
    }

    #[test]
    fn test_rejects_zero_rows() {
        let config = FixtureConfig::new(0, 2, "out.csv");
        assert!(matches!(config.validate(), Err(FixtureError::InvalidRows)));
    }

    #[test]
    fn test_rejects_zero_columns() {
        let config = FixtureConfig::new(1, 0, "out.csv");
        assert!(matches!(config.validate(), Err(FixtureError::InvalidColumns)));
    }

    #[test]
    fn test_rejects_zero_interval() {
        let config = FixtureConfig {
            progress_interval: 0,
            ..FixtureConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(FixtureError::InvalidProgressInterval)
        ));
    }

    #[test]
    fn test_delimiters() {
        for delimiter in [b';', b'\t', b'|'] {
            let config = FixtureConfig {
                delimiter,
                ..FixtureConfig::default()
            };
            assert!(config.validate().is_ok());
        }
        for delimiter in [b'"', b'\n', b'\r', 0xE9] {
            let config = FixtureConfig {
                delimiter,
                ..FixtureConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(FixtureError::InvalidDelimiter(_))
            ));
        }
    }
}
