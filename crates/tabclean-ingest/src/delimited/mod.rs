//! Delimited text (CSV) reading and writing.

mod kind;
mod reader;
mod writer;

pub use kind::{detect_column_kind, parse_cell};
pub use reader::{
    MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit, file_size, read_csv_table,
    read_csv_table_from_reader, validate_encoding,
};
pub use writer::{write_csv_table, write_csv_table_to_writer};
