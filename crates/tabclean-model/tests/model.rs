//! Tests for tabclean-model types.

use tabclean_model::{Cell, Column, ColumnKind, Row, Table, TableError};

#[test]
fn table_round_trips_through_json() {
    let table = Table::with_rows(
        vec![Column::text("City"), Column::float("Score")],
        vec![Row::new(vec![Cell::text("NYC"), Cell::Float(1.5)])],
    );
    let json = serde_json::to_string(&table).expect("serialize table");
    let round: Table = serde_json::from_str(&json).expect("deserialize table");
    assert_eq!(round, table);
}

#[test]
fn cell_serializes_tagged() {
    let json = serde_json::to_value(Cell::text("usa")).expect("serialize cell");
    assert_eq!(json, serde_json::json!({"kind": "Text", "value": "usa"}));
    let json = serde_json::to_value(Cell::Null).expect("serialize cell");
    assert_eq!(json, serde_json::json!({"kind": "Null"}));
}

#[test]
fn validation_reports_first_offending_row() {
    let table = Table::with_rows(
        vec![Column::text("Name"), Column::boolean("Active")],
        vec![
            Row::new(vec![Cell::text("a"), Cell::Boolean(true)]),
            Row::new(vec![Cell::text("b"), Cell::Integer(1)]),
            Row::new(vec![Cell::text("c")]),
        ],
    );
    assert_eq!(
        table.validate(),
        Err(TableError::CellKindMismatch {
            row: 1,
            column: "Active".to_string(),
            expected: ColumnKind::Boolean,
            actual: "integer",
        })
    );
}

#[test]
fn empty_table_is_valid() {
    let table = Table::new(vec![Column::text("Name")]);
    assert!(table.is_empty());
    assert_eq!(table.width(), 1);
    assert_eq!(table.validate(), Ok(()));
}
