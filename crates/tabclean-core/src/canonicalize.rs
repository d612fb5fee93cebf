//! Synonym canonicalization of text cells.

use std::collections::BTreeMap;

use tabclean_model::{Cell, Row, Table};
use tabclean_vocab::SynonymTable;
use tracing::debug;

/// Result of [`canonicalize`].
#[derive(Debug, Clone, PartialEq)]
pub struct Canonicalized {
    pub table: Table,
    /// Total number of cells rewritten.
    pub normalized_entities: usize,
    /// Rewrites per column name; columns without rewrites are absent.
    pub by_column: BTreeMap<String, usize>,
}

/// Rewrites every text cell that matches an alias to its canonical form.
///
/// Every text cell is eligible regardless of column. Matching ignores case and
/// surrounding whitespace but is otherwise exact. Non-text cells and
/// non-matching text cells are copied unchanged. A matched cell is counted
/// even when its raw value already equals the canonical string, and a
/// rewritten value is not looked up a second time.
pub fn canonicalize(table: &Table, synonyms: &SynonymTable) -> Canonicalized {
    let mut by_column: BTreeMap<String, usize> = BTreeMap::new();
    let mut normalized_entities = 0usize;

    let rows: Vec<Row> = table
        .rows()
        .iter()
        .map(|row| {
            let cells = row
                .cells
                .iter()
                .enumerate()
                .map(|(idx, cell)| {
                    let Some(canonical) = cell.as_text().and_then(|raw| synonyms.lookup(raw))
                    else {
                        return cell.clone();
                    };
                    normalized_entities += 1;
                    if let Some(column) = table.columns().get(idx) {
                        *by_column.entry(column.name.clone()).or_default() += 1;
                    }
                    Cell::text(canonical)
                })
                .collect();
            Row::new(cells)
        })
        .collect();

    for (column, count) in &by_column {
        debug!(column = %column, rewrites = count, "canonicalized column");
    }

    Canonicalized {
        table: Table::with_rows(table.columns().to_vec(), rows),
        normalized_entities,
        by_column,
    }
}
