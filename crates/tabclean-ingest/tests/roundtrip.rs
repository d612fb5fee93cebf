//! Integration tests for reading and writing CSV datasets.

use std::io::Write;

use tabclean_ingest::{IngestError, file_size, read_csv_table, write_csv_table};
use tabclean_model::{Cell, ColumnKind};
use tempfile::{NamedTempFile, TempDir};

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn written_table_reads_back_identically() {
    let file = create_temp_csv(
        "Name,Age,Score,Active,City\n\
         Alice,30,1.5,True, New York \n\
         bob,,2.0,false,\"Paris, FR\"\n",
    );
    let table = read_csv_table(file.path()).unwrap();

    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.csv");
    write_csv_table(&table, &out).unwrap();
    let reread = read_csv_table(&out).unwrap();

    assert_eq!(reread, table);
    assert_eq!(reread.columns()[2].kind, ColumnKind::Float);
    assert_eq!(reread.columns()[3].kind, ColumnKind::Boolean);
    assert_eq!(reread.rows()[0].cells[4], Cell::text(" New York "));
}

#[test]
fn file_size_reports_bytes() {
    let file = create_temp_csv("A\n1\n");
    assert_eq!(file_size(file.path()).unwrap(), 4);
}

#[test]
fn write_to_missing_directory_fails() {
    let file = create_temp_csv("A\n1\n");
    let table = read_csv_table(file.path()).unwrap();
    let result = write_csv_table(&table, std::path::Path::new("/no/such/dir/out.csv"));
    assert!(matches!(result, Err(IngestError::FileWrite { .. })));
}

#[test]
fn whitespace_only_text_survives_round_trip() {
    let file = create_temp_csv("Name,City\nAlice,   \nBob,x\n");
    let table = read_csv_table(file.path()).unwrap();
    assert_eq!(table.rows()[0].cells[1], Cell::text("   "));

    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.csv");
    write_csv_table(&table, &out).unwrap();
    assert_eq!(
        std::fs::read_to_string(&out).unwrap(),
        "Name,City\nAlice,   \nBob,x\n"
    );
}
