//! Column kind detection for raw CSV fields.

use tabclean_model::{Cell, ColumnKind};

fn parse_bool(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Rejects `nan`, `inf` and overflowing literals, which `f64::from_str` accepts.
fn parse_finite(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Picks the narrowest kind that every non-empty field parses as.
///
/// Integer is preferred over float, float over boolean; anything else (or a
/// column with no values at all) is text.
pub fn detect_column_kind<'a, I>(fields: I) -> ColumnKind
where
    I: IntoIterator<Item = &'a str>,
{
    let mut all_integer = true;
    let mut all_float = true;
    let mut all_boolean = true;
    let mut seen_value = false;

    for field in fields {
        let trimmed = field.trim();
        if trimmed.is_empty() {
            continue;
        }
        seen_value = true;
        all_integer &= trimmed.parse::<i64>().is_ok();
        all_float &= parse_finite(trimmed).is_some();
        all_boolean &= parse_bool(trimmed).is_some();
        if !(all_integer || all_float || all_boolean) {
            return ColumnKind::Text;
        }
    }

    match (seen_value, all_integer, all_float, all_boolean) {
        (false, ..) => ColumnKind::Text,
        (true, true, _, _) => ColumnKind::Integer,
        (true, false, true, _) => ColumnKind::Float,
        (true, false, false, true) => ColumnKind::Boolean,
        _ => ColumnKind::Text,
    }
}

/// Converts a raw field into a cell of the given kind.
///
/// Empty fields become [`Cell::Null`]. Text keeps the raw value, including
/// surrounding whitespace, so a whitespace-only text field is not null.
/// Numeric and boolean fields are trimmed first. A field that does not parse
/// as the column's kind is kept as text so that schema validation can report
/// it.
pub fn parse_cell(raw: &str, kind: ColumnKind) -> Cell {
    if raw.is_empty() {
        return Cell::Null;
    }
    if kind == ColumnKind::Text {
        return Cell::text(raw);
    }
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Cell::Null;
    }
    let parsed = match kind {
        ColumnKind::Text => None,
        ColumnKind::Integer => trimmed.parse().ok().map(Cell::Integer),
        ColumnKind::Float => parse_finite(trimmed).map(Cell::Float),
        ColumnKind::Boolean => parse_bool(trimmed).map(Cell::Boolean),
    };
    parsed.unwrap_or_else(|| Cell::text(raw))
}
