//! Summary of one cleaning run.

use serde::Serialize;

/// Counts describing what a cleaning run changed.
///
/// Built once from the counts the pipeline stages actually produced and never
/// modified afterwards. `duplicates_removed + cleaned_rows == original_rows`
/// always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CleaningReport {
    original_rows: usize,
    cleaned_rows: usize,
    duplicates_removed: usize,
    normalized_entities: usize,
}

impl CleaningReport {
    /// Aggregates stage counts into a report.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the row counts do not add up.
    pub fn new(
        original_rows: usize,
        cleaned_rows: usize,
        duplicates_removed: usize,
        normalized_entities: usize,
    ) -> Self {
        debug_assert_eq!(
            duplicates_removed + cleaned_rows,
            original_rows,
            "row counts must be conserved"
        );
        Self {
            original_rows,
            cleaned_rows,
            duplicates_removed,
            normalized_entities,
        }
    }

    /// Report for an empty input.
    pub fn empty() -> Self {
        Self::new(0, 0, 0, 0)
    }

    pub fn original_rows(&self) -> usize {
        self.original_rows
    }

    pub fn cleaned_rows(&self) -> usize {
        self.cleaned_rows
    }

    pub fn duplicates_removed(&self) -> usize {
        self.duplicates_removed
    }

    /// Number of text cells rewritten to their canonical form.
    pub fn normalized_entities(&self) -> usize {
        self.normalized_entities
    }

    /// Whether the run changed anything at all.
    pub fn is_noop(&self) -> bool {
        self.duplicates_removed == 0 && self.normalized_entities == 0
    }
}
