//! Integration tests for loading vocabulary files from disk.

use std::io::Write;

use tabclean_vocab::{VocabError, default_vocabulary, load_vocabulary};
use tempfile::Builder;

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn loads_toml_vocabulary() {
    let file = write_temp(
        ".toml",
        r#"
[synonyms]
usa = "United States"
uk = "United Kingdom"
"#,
    );
    let vocabulary = load_vocabulary(file.path()).unwrap();
    let table = vocabulary.synonym_table();
    assert_eq!(table.len(), 2);
    assert_eq!(table.lookup(" UK "), Some("United Kingdom"));
}

#[test]
fn loads_csv_vocabulary() {
    let file = write_temp(
        ".CSV",
        "alias,canonical\nnyc,New York City\nla,Los Angeles\n\n",
    );
    let vocabulary = load_vocabulary(file.path()).unwrap();
    assert_eq!(vocabulary.alias_count(), 2);
    assert_eq!(vocabulary.canonical_for("LA"), Some("Los Angeles"));
}

#[test]
fn rejects_unknown_extension() {
    let file = write_temp(".json", "{}");
    let err = load_vocabulary(file.path()).unwrap_err();
    assert!(matches!(err, VocabError::UnsupportedFormat { .. }));
}

#[test]
fn missing_file_is_io_error() {
    let err = load_vocabulary(std::path::Path::new("/nonexistent/vocab.toml")).unwrap_err();
    assert!(matches!(err, VocabError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/vocab.toml"));
}

#[test]
fn file_vocabulary_matches_builtin_when_equivalent() {
    let file = write_temp(
        ".toml",
        r#"
[synonyms]
usa = "United States"
nyc = "New York City"
uae = "United Arab Emirates"
uk = "United Kingdom"
"#,
    );
    let loaded = load_vocabulary(file.path()).unwrap().synonym_table();
    assert_eq!(loaded, default_vocabulary().synonym_table());
}
