use thiserror::Error;

/// Errors returned while building, querying or rendering a table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    /// `Table::new` was given no rows, so there is nothing to use as a header.
    #[error("table data is empty; expected at least a header row")]
    MissingHeader,
    /// A data row does not have the same number of values as the header.
    #[error("row {row} has {found} values but the header has {expected}")]
    RowLength {
        /// Zero-based position of the offending data row.
        row: usize,
        /// Number of header columns.
        expected: usize,
        /// Number of values found in the row.
        found: usize,
    },
    /// No header cell matches the requested column name.
    #[error("no column named {0:?}")]
    UnknownColumn(String),
    /// A column position fell outside the table.
    #[error("column index {index} is out of range for a table with {columns} columns")]
    ColumnOutOfRange {
        /// The requested (possibly negative) position.
        index: isize,
        /// Number of columns in the table.
        columns: usize,
    },
    /// A row position fell outside the table.
    #[error("row index {index} is out of range for a table with {rows} rows")]
    RowOutOfRange {
        /// The requested (possibly negative) position.
        index: isize,
        /// Number of data rows in the table.
        rows: usize,
    },
    /// The cells of one row reached the join step with different line counts.
    ///
    /// The wrap and pad stages always equalize line counts, so this signals a
    /// defect rather than bad input.
    #[error("column {column} has {found} lines but the row expects {expected}")]
    RaggedRow {
        /// Zero-based position of the first mismatched column.
        column: usize,
        /// Line count of the first column.
        expected: usize,
        /// Line count of the mismatched column.
        found: usize,
    },
    /// A color name is not part of the palette.
    #[error("unknown color {0:?}")]
    UnknownColor(String),
}
