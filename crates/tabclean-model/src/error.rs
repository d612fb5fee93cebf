use thiserror::Error;

use crate::table::ColumnKind;

/// Errors raised when a table violates its own column schema.
///
/// Every variant carries the zero-based index of the offending row so the
/// problem can be located in the source file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A row does not have exactly one cell per declared column.
    #[error("row {row} has {actual} cells but the table declares {expected} columns")]
    SchemaMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A cell holds a value the column's declared kind does not accept.
    #[error("row {row}, column '{column}': expected {expected} value, found {actual}")]
    CellKindMismatch {
        row: usize,
        column: String,
        expected: ColumnKind,
        actual: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_mismatch_display() {
        let err = TableError::SchemaMismatch {
            row: 7,
            expected: 4,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "row 7 has 3 cells but the table declares 4 columns"
        );
    }

    #[test]
    fn cell_kind_mismatch_display() {
        let err = TableError::CellKindMismatch {
            row: 2,
            column: "Age".to_string(),
            expected: ColumnKind::Integer,
            actual: "text",
        };
        assert_eq!(
            err.to_string(),
            "row 2, column 'Age': expected integer value, found text"
        );
    }
}
