//! Cleaning pipeline for tabular datasets.
//!
//! The pipeline runs four stages in order:
//!
//! 1. **Normalize** - derive a case/whitespace-insensitive [`ComparisonKey`]
//!    for every row without touching the row itself.
//! 2. **Deduplicate** - keep the first row for each key, in original order.
//! 3. **Canonicalize** - rewrite text cells that match a known alias to the
//!    alias's canonical form.
//! 4. **Report** - aggregate the counts the stages produced.
//!
//! [`clean_table`] runs all of them and either returns a complete result or
//! fails before producing any output.

pub mod canonicalize;
pub mod dedupe;
pub mod normalize;
pub mod pipeline;

pub use canonicalize::{Canonicalized, canonicalize};
pub use dedupe::{Deduplicated, deduplicate};
pub use normalize::{ComparisonKey, KeyCell, comparison_key};
pub use pipeline::{CleaningOutcome, clean_table};

pub use tabclean_model::{CleaningReport, TableError};
pub use tabclean_vocab::SynonymTable;
