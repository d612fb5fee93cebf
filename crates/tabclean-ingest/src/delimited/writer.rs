//! CSV file writing.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tabclean_model::Table;

use crate::error::{IngestError, Result};

/// Writes a table as CSV with a single header row.
pub fn write_csv_table(table: &Table, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    write_csv_table_to_writer(table, BufWriter::new(file), path)?;
    tracing::debug!(
        path = %path.display(),
        rows = table.height(),
        "wrote CSV"
    );
    Ok(())
}

/// Writes a table as CSV to any writer. `path` is only used for error context.
pub fn write_csv_table_to_writer<W: Write>(table: &Table, writer: W, path: &Path) -> Result<()> {
    let write_error = |e: csv::Error| IngestError::CsvWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let mut writer = csv::Writer::from_writer(writer);
    writer
        .write_record(table.column_names())
        .map_err(write_error)?;
    for row in table.rows() {
        writer
            .write_record(row.cells.iter().map(ToString::to_string))
            .map_err(write_error)?;
    }
    writer.flush().map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
