//! End-to-end cleaning run.

use std::time::Instant;

use tabclean_model::{CleaningReport, Table, TableError};
use tabclean_vocab::SynonymTable;
use tracing::{info, info_span};

use crate::canonicalize::{Canonicalized, canonicalize};
use crate::dedupe::{Deduplicated, deduplicate};

/// Cleaned table plus the report describing how it was produced.
#[derive(Debug, Clone, PartialEq)]
pub struct CleaningOutcome {
    pub table: Table,
    pub report: CleaningReport,
}

/// Validates, deduplicates and canonicalizes `input`.
///
/// The input is only borrowed and never modified. If the table breaks its
/// own schema the run fails before any stage executes, so there is no
/// partially cleaned output.
pub fn clean_table(
    input: &Table,
    synonyms: &SynonymTable,
) -> Result<CleaningOutcome, TableError> {
    let span = info_span!(
        "clean",
        rows = input.height(),
        columns = input.width(),
        aliases = synonyms.len()
    );
    let _guard = span.enter();
    let start = Instant::now();

    input.validate()?;

    let original_rows = input.height();
    let Deduplicated {
        table: deduped,
        duplicates_removed,
    } = deduplicate(input);
    let Canonicalized {
        table,
        normalized_entities,
        ..
    } = canonicalize(&deduped, synonyms);

    let report = CleaningReport::new(
        original_rows,
        table.height(),
        duplicates_removed,
        normalized_entities,
    );
    info!(
        original_rows = report.original_rows(),
        cleaned_rows = report.cleaned_rows(),
        duplicates_removed = report.duplicates_removed(),
        normalized_entities = report.normalized_entities(),
        duration_ms = start.elapsed().as_millis(),
        "cleaning complete"
    );

    Ok(CleaningOutcome { table, report })
}
