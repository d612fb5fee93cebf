//! Order-preserving duplicate removal.

use std::collections::HashSet;

use tabclean_model::{Row, Table};
use tracing::debug;

use crate::normalize::comparison_key;

/// Result of [`deduplicate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Deduplicated {
    /// Rows whose comparison key was seen for the first time, in input order.
    pub table: Table,
    /// Number of input rows dropped as duplicates.
    pub duplicates_removed: usize,
}

/// Drops rows whose comparison key matches an earlier row.
///
/// The first occurrence wins and is kept with its raw values; later variants
/// that differ only in case or surrounding whitespace are dropped.
pub fn deduplicate(table: &Table) -> Deduplicated {
    let mut seen = HashSet::with_capacity(table.height());
    let keep: Vec<bool> = table
        .rows()
        .iter()
        .map(|row| seen.insert(comparison_key(row)))
        .collect();

    let rows: Vec<Row> = table
        .rows()
        .iter()
        .zip(&keep)
        .filter(|(_, keep)| **keep)
        .map(|(row, _)| row.clone())
        .collect();
    let duplicates_removed = table.height() - rows.len();
    debug!(
        rows_in = table.height(),
        rows_out = rows.len(),
        duplicates_removed,
        "deduplicated rows"
    );

    Deduplicated {
        table: Table::with_rows(table.columns().to_vec(), rows),
        duplicates_removed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabclean_model::{Cell, Column};

    fn names(values: &[&str]) -> Table {
        Table::with_rows(
            vec![Column::text("Name")],
            values
                .iter()
                .map(|value| Row::new(vec![Cell::text(*value)]))
                .collect(),
        )
    }

    fn raw_names(table: &Table) -> Vec<String> {
        table
            .rows()
            .iter()
            .map(|row| row.cells[0].to_string())
            .collect()
    }

    #[test]
    fn keeps_first_occurrence_raw_value() {
        let result = deduplicate(&names(&["Alice", "alice", " ALICE ", "Bob"]));
        assert_eq!(raw_names(&result.table), vec!["Alice", "Bob"]);
        assert_eq!(result.duplicates_removed, 2);
    }

    #[test]
    fn preserves_order_of_kept_rows() {
        let result = deduplicate(&names(&["c", "a", "C", "b", "a"]));
        assert_eq!(raw_names(&result.table), vec!["c", "a", "b"]);
    }

    #[test]
    fn empty_table_stays_empty() {
        let result = deduplicate(&names(&[]));
        assert!(result.table.is_empty());
        assert_eq!(result.table.width(), 1);
        assert_eq!(result.duplicates_removed, 0);
    }

    #[test]
    fn input_is_not_modified() {
        let input = names(&["x", "X"]);
        let before = input.clone();
        let _ = deduplicate(&input);
        assert_eq!(input, before);
    }

    #[test]
    fn null_cells_compare_equal() {
        let table = Table::with_rows(
            vec![Column::text("Name"), Column::integer("Age")],
            vec![
                Row::new(vec![Cell::text("a"), Cell::Null]),
                Row::new(vec![Cell::text("A"), Cell::Null]),
                Row::new(vec![Cell::text("a"), Cell::Integer(1)]),
            ],
        );
        let result = deduplicate(&table);
        assert_eq!(result.table.height(), 2);
        assert_eq!(result.duplicates_removed, 1);
    }
}
