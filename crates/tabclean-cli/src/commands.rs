use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use tracing::info_span;

use tabclean_core::clean_table;
use tabclean_ingest::{file_size, read_csv_table, write_csv_table};
use tabclean_vocab::{Vocabulary, default_vocabulary, load_vocabulary};

use crate::cli::{CleanArgs, VocabArgs};
use crate::summary::print_vocabulary;
use crate::types::{CleanResult, VocabularySource};

pub fn run_clean(args: &CleanArgs) -> Result<CleanResult> {
    let span = info_span!("clean_file", input = %args.input.display(), dry_run = args.dry_run);
    let _guard = span.enter();

    let (vocabulary, source) = load_active_vocabulary(args.vocab.as_deref())?;
    let synonyms = vocabulary.synonym_table();

    let input_bytes = file_size(&args.input)
        .with_context(|| format!("inspect {}", args.input.display()))?;
    let table = read_csv_table(&args.input)
        .with_context(|| format!("load {}", args.input.display()))?;
    let preview = table.head(args.preview_rows);

    let outcome = clean_table(&table, &synonyms)
        .with_context(|| format!("clean {}", args.input.display()))?;

    let (output, output_bytes) = if args.dry_run {
        (None, None)
    } else {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&args.input, Local::now().naive_local()));
        write_csv_table(&outcome.table, &path)
            .with_context(|| format!("write {}", path.display()))?;
        let bytes = file_size(&path).with_context(|| format!("inspect {}", path.display()))?;
        tracing::info!(output = %path.display(), bytes, "wrote cleaned dataset");
        (Some(path), Some(bytes))
    };

    Ok(CleanResult {
        input: args.input.clone(),
        output,
        vocabulary: source,
        report: outcome.report,
        input_bytes,
        output_bytes,
        preview,
    })
}

pub fn run_vocab(args: &VocabArgs) -> Result<()> {
    let (vocabulary, source) = load_active_vocabulary(args.vocab.as_deref())?;
    print_vocabulary(&vocabulary, &source);
    Ok(())
}

/// Loads `path` when given, otherwise the built-in vocabulary.
pub fn load_active_vocabulary(path: Option<&Path>) -> Result<(Vocabulary, VocabularySource)> {
    match path {
        Some(path) => {
            let vocabulary = load_vocabulary(path)
                .with_context(|| format!("load vocabulary {}", path.display()))?;
            Ok((vocabulary, VocabularySource::File(path.to_path_buf())))
        }
        None => Ok((default_vocabulary(), VocabularySource::BuiltIn)),
    }
}

/// `optimized_<YYYYMMDD_HHMMSS>.csv` in the input's directory.
pub fn default_output_path(input: &Path, now: NaiveDateTime) -> PathBuf {
    let name = format!("optimized_{}.csv", now.format("%Y%m%d_%H%M%S"));
    match input.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn default_output_sits_next_to_input() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|date| date.and_hms_opt(14, 5, 7))
            .unwrap();
        assert_eq!(
            default_output_path(Path::new("data/raw/people.csv"), now),
            PathBuf::from("data/raw/optimized_20240309_140507.csv")
        );
        assert_eq!(
            default_output_path(Path::new("people.csv"), now),
            PathBuf::from("optimized_20240309_140507.csv")
        );
    }

    #[test]
    fn built_in_vocabulary_when_no_path() {
        let (vocabulary, source) = load_active_vocabulary(None).unwrap();
        assert_eq!(source, VocabularySource::BuiltIn);
        assert_eq!(vocabulary.canonical_for("usa"), Some("United States"));
    }
}
