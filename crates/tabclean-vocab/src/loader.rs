//! Vocabulary files.
//!
//! Two formats are accepted, chosen by file extension:
//!
//! ```toml
//! # vocabulary.toml
//! [synonyms]
//! usa = "United States"
//! nyc = "New York City"
//!
//! [[term]]
//! canonical = "United Kingdom"
//! aliases = ["uk", "great britain"]
//! ```
//!
//! ```text
//! alias,canonical
//! usa,United States
//! uae,United Arab Emirates
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, VocabError};
use crate::vocabulary::Vocabulary;

#[derive(Debug, Default, Deserialize)]
struct VocabularyFile {
    #[serde(default)]
    synonyms: BTreeMap<String, String>,
    #[serde(default, rename = "term")]
    terms: Vec<TermEntry>,
}

#[derive(Debug, Deserialize)]
struct TermEntry {
    canonical: String,
    #[serde(default)]
    aliases: Vec<String>,
}

/// Loads a vocabulary from a `.toml` or `.csv` file.
pub fn load_vocabulary(path: &Path) -> Result<Vocabulary> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let vocabulary = match extension.as_deref() {
        Some("toml") => {
            let text = std::fs::read_to_string(path).map_err(|e| VocabError::io(path, e))?;
            parse_vocabulary_toml(&text, path)?
        }
        Some("csv") => {
            let bytes = std::fs::read(path).map_err(|e| VocabError::io(path, e))?;
            parse_vocabulary_csv(bytes.as_slice(), path)?
        }
        _ => {
            return Err(VocabError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
    };
    tracing::debug!(
        path = %path.display(),
        terms = vocabulary.term_count(),
        aliases = vocabulary.alias_count(),
        "loaded vocabulary"
    );
    Ok(vocabulary)
}

/// Parses TOML vocabulary text.
///
/// `[synonyms]` pairs are added first, then `[[term]]` entries in file order.
/// `path` is only used for error context.
pub fn parse_vocabulary_toml(text: &str, path: &Path) -> Result<Vocabulary> {
    let file: VocabularyFile = toml::from_str(text).map_err(|source| VocabError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    let mut vocabulary = Vocabulary::new();
    for (alias, canonical) in &file.synonyms {
        vocabulary.add_alias(alias, canonical)?;
    }
    for term in &file.terms {
        for alias in &term.aliases {
            vocabulary.add_alias(alias, &term.canonical)?;
        }
    }
    Ok(vocabulary)
}

fn header_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
}

/// Parses CSV vocabulary data with `alias` and `canonical` columns.
///
/// `path` is only used for error context.
pub fn parse_vocabulary_csv<R: std::io::Read>(reader: R, path: &Path) -> Result<Vocabulary> {
    let csv_error = |e: csv::Error| VocabError::Csv {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers = reader.headers().map_err(csv_error)?.clone();
    let missing = |column: &str| VocabError::MissingColumn {
        column: column.to_string(),
        path: path.to_path_buf(),
    };
    let idx_alias = header_index(&headers, "alias").ok_or_else(|| missing("alias"))?;
    let idx_canonical = header_index(&headers, "canonical").ok_or_else(|| missing("canonical"))?;

    let mut vocabulary = Vocabulary::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let alias = record.get(idx_alias).unwrap_or_default();
        let canonical = record.get(idx_canonical).unwrap_or_default();
        if alias.trim().is_empty() && canonical.trim().is_empty() {
            continue;
        }
        vocabulary.add_alias(alias, canonical)?;
    }
    Ok(vocabulary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_synonyms_table_and_terms() {
        let vocabulary = parse_vocabulary_toml(
            r#"
[synonyms]
usa = "United States"
NYC = "New York City"

[[term]]
canonical = "United Kingdom"
aliases = ["uk", "Great Britain"]
"#,
            Path::new("vocab.toml"),
        )
        .unwrap();
        assert_eq!(vocabulary.alias_count(), 4);
        assert_eq!(vocabulary.canonical_for("nyc"), Some("New York City"));
        assert_eq!(
            vocabulary.aliases_of("United Kingdom"),
            ["uk", "great britain"]
        );
    }

    #[test]
    fn empty_toml_is_empty_vocabulary() {
        let vocabulary = parse_vocabulary_toml("", Path::new("vocab.toml")).unwrap();
        assert!(vocabulary.is_empty());
    }

    #[test]
    fn toml_conflict_is_reported() {
        let result = parse_vocabulary_toml(
            r#"
[synonyms]
uk = "United Kingdom"

[[term]]
canonical = "Ukraine"
aliases = ["UK"]
"#,
            Path::new("vocab.toml"),
        );
        assert!(matches!(result, Err(VocabError::ConflictingAlias { .. })));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let result = parse_vocabulary_toml("[synonyms\nusa = ", Path::new("vocab.toml"));
        assert!(matches!(result, Err(VocabError::Toml { .. })));
    }

    #[test]
    fn parses_csv_with_any_header_case() {
        let data = "Alias,Canonical\nusa,United States\n uae ,United Arab Emirates\n";
        let vocabulary = parse_vocabulary_csv(data.as_bytes(), Path::new("vocab.csv")).unwrap();
        assert_eq!(vocabulary.alias_count(), 2);
        assert_eq!(vocabulary.canonical_for("UAE"), Some("United Arab Emirates"));
    }

    #[test]
    fn csv_without_canonical_column_fails() {
        let data = "alias,target\nusa,United States\n";
        let err = parse_vocabulary_csv(data.as_bytes(), Path::new("vocab.csv")).unwrap_err();
        assert!(matches!(
            err,
            VocabError::MissingColumn { ref column, .. } if column == "canonical"
        ));
    }
}
