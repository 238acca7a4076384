//! Error types for table construction and access.
//!
//! Rendering never fails. Errors come from addressing a cell or row that
//! does not exist, or from configuring a frame with characters that would
//! break the border-width invariant.

use thiserror::Error;

/// Errors produced by the table layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A `(row, column)` address outside the table.
    #[error("cell ({row}, {column}) out of bounds for a {rows}x{columns} table")]
    CellOutOfBounds {
        /// The requested row.
        row: usize,
        /// The requested column.
        column: usize,
        /// Number of rows in the table.
        rows: usize,
        /// Number of columns in the table.
        columns: usize,
    },

    /// A row index outside the table.
    #[error("row {row} out of bounds for a table with {rows} rows")]
    RowOutOfBounds {
        /// The requested row.
        row: usize,
        /// Number of rows in the table.
        rows: usize,
    },

    /// A frame character that does not occupy exactly one terminal column.
    #[error("frame character {ch:?} has display width {width}, expected 1")]
    InvalidFrameChar {
        /// The rejected character.
        ch: char,
        /// Its display width.
        width: usize,
    },
}

/// Result alias for table operations.
pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_out_of_bounds_message() {
        let err = TableError::CellOutOfBounds {
            row: 3,
            column: 1,
            rows: 2,
            columns: 4,
        };
        assert_eq!(
            err.to_string(),
            "cell (3, 1) out of bounds for a 2x4 table"
        );
    }

    #[test]
    fn invalid_frame_char_message() {
        let err = TableError::InvalidFrameChar { ch: '中', width: 2 };
        assert_eq!(
            err.to_string(),
            "frame character '中' has display width 2, expected 1"
        );
    }
}
