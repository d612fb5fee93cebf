//! Data model shared by the tabclean crates.
//!
//! A [`Table`] is an ordered sequence of [`Row`]s sharing one column schema.
//! Cells are either text or a non-text scalar; only text cells take part in
//! case/whitespace normalization and synonym canonicalization.

pub mod error;
pub mod report;
pub mod table;
pub mod text;

pub use error::{Result, TableError};
pub use report::CleaningReport;
pub use table::{Cell, Column, ColumnKind, Row, Table};
pub use text::normalize_text;
