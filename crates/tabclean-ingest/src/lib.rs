//! Dataset loading and saving.
//!
//! This crate reads delimited text files into [`tabclean_model::Table`]s and
//! writes cleaned tables back out. It owns every file-system concern so the
//! cleaning pipeline never touches storage.
//!
//! # Features
//!
//! - **CSV Loading**: single header row, UTF-8 (BOM tolerated), size guard
//! - **Column Kinds**: integer, float, boolean or text, detected per column
//! - **CSV Writing**: round-trips the loaded representation
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tabclean_ingest::{read_csv_table, write_csv_table};
//!
//! let table = read_csv_table(Path::new("datasets/synthetic_dataset.csv"))?;
//! write_csv_table(&table, Path::new("optimized.csv"))?;
//! ```

mod delimited;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading / Writing ===
pub use delimited::{
    MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit, detect_column_kind, file_size,
    parse_cell, read_csv_table, read_csv_table_from_reader, validate_encoding, write_csv_table,
    write_csv_table_to_writer,
};
