use std::iter::FusedIterator;

/// One CSV record worth of cells
pub type Row = Vec<String>;

/// Cell text for column `column` of the header row
#[must_use]
pub fn header_cell(column: usize) -> String {
    format!("header {}", column)
}

/// Cell text for data row `row` (1-indexed) and column `column` (0-indexed)
#[must_use]
pub fn data_cell(row: usize, column: usize) -> String {
    format!("row {} col {}", row, column)
}

/// Lazily yields the rows of a placeholder table: one header row followed by
/// `rows - 1` data rows, each `columns` cells wide.
///
/// `rows` counts the header, so both `0` and `1` yield the header alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleTable {
    rows: usize,
    columns: usize,
    /// Index of the next row to yield, the header being row `0`
    next_row: usize,
}

impl SampleTable {
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        SampleTable {
            rows,
            columns,
            next_row: 0,
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows the table yields in total, header included
    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.rows.max(1)
    }

    fn header(&self) -> Row {
        (0..self.columns).map(header_cell).collect()
    }

    fn data_row(&self, row: usize) -> Row {
        (0..self.columns).map(|column| data_cell(row, column)).collect()
    }
}

impl Iterator for SampleTable {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        let row = match self.next_row {
            0 => self.header(),
            r if r < self.rows => self.data_row(r),
            _ => return None,
        };
        self.next_row += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total_rows().saturating_sub(self.next_row);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SampleTable {}

impl FusedIterator for SampleTable {}
