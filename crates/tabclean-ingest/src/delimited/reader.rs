//! CSV file reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tabclean_model::{Column, ColumnKind, Row, Table};

use super::kind::{detect_column_kind, parse_cell};
use crate::error::{IngestError, Result};

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

fn open_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

/// Size of a file in bytes.
pub fn file_size(path: &Path) -> Result<u64> {
    std::fs::metadata(path)
        .map(|metadata| metadata.len())
        .map_err(|e| open_error(path, e))
}

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let size = file_size(path)?;
    if size > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            max_size,
        });
    }
    Ok(())
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    // UTF-8 BOM is acceptable (stripped before parsing)
    Ok(())
}

/// Reads a CSV file with a single header row into a [`Table`].
///
/// Column kinds are detected from the data. Records with a different field
/// count than the header are kept as they are; the cleaning pipeline reports
/// them as schema mismatches with their row index.
pub fn read_csv_table(path: &Path) -> Result<Table> {
    validate_encoding(path)?;
    check_file_size(path)?;
    let bytes = std::fs::read(path).map_err(|e| open_error(path, e))?;
    let data = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes.as_slice());
    read_csv_table_from_reader(data, path)
}

/// Reads CSV data from any reader. `path` is only used for error context.
pub fn read_csv_table_from_reader<R: Read>(reader: R, path: &Path) -> Result<Table> {
    let parse_error = |e: csv::Error| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers().map_err(parse_error)?.clone();
    if headers.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    let names: Vec<String> = headers.iter().map(|h| h.trim().to_string()).collect();
    if let Some(position) = names.iter().position(String::is_empty) {
        return Err(IngestError::EmptyColumnName {
            path: path.to_path_buf(),
            position,
        });
    }

    let records = reader
        .records()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(parse_error)?;

    let kinds: Vec<ColumnKind> = (0..names.len())
        .map(|idx| detect_column_kind(records.iter().filter_map(|record| record.get(idx))))
        .collect();
    let columns: Vec<Column> = names
        .into_iter()
        .zip(&kinds)
        .map(|(name, kind)| Column::new(name, *kind))
        .collect();

    let rows: Vec<Row> = records
        .iter()
        .map(|record| {
            Row::new(
                record
                    .iter()
                    .enumerate()
                    .map(|(idx, field)| {
                        parse_cell(field, kinds.get(idx).copied().unwrap_or(ColumnKind::Text))
                    })
                    .collect(),
            )
        })
        .collect();

    if columns.len() > 500 {
        tracing::warn!(
            path = %path.display(),
            columns = columns.len(),
            "Dataset has more than 500 columns - may impact performance"
        );
    }
    tracing::debug!(
        path = %path.display(),
        rows = rows.len(),
        columns = columns.len(),
        "loaded CSV"
    );

    Ok(Table::with_rows(columns, rows))
}
