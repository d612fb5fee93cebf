//! Row comparison keys.

use tabclean_model::{Cell, Row, normalize_text};

/// One normalized cell of a [`ComparisonKey`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyCell {
    Text(String),
    Integer(i64),
    /// Bit pattern of the float, with `-0.0` folded into `0.0`.
    Float(u64),
    Boolean(bool),
    Null,
}

impl From<&Cell> for KeyCell {
    fn from(cell: &Cell) -> Self {
        match cell {
            Cell::Text(value) => Self::Text(normalize_text(value)),
            Cell::Integer(value) => Self::Integer(*value),
            Cell::Float(value) => {
                let value = if *value == 0.0 { 0.0 } else { *value };
                Self::Float(value.to_bits())
            }
            Cell::Boolean(value) => Self::Boolean(*value),
            Cell::Null => Self::Null,
        }
    }
}

/// Normalized form of a row, used only to detect duplicates.
///
/// Two rows are duplicates iff their keys are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComparisonKey(Vec<KeyCell>);

impl ComparisonKey {
    pub fn cells(&self) -> &[KeyCell] {
        &self.0
    }
}

/// Computes the comparison key for a row.
///
/// Text cells are trimmed and lowercased; every other cell passes through
/// unchanged, so numeric and null equality stays exact.
pub fn comparison_key(row: &Row) -> ComparisonKey {
    ComparisonKey(row.cells.iter().map(KeyCell::from).collect())
}
