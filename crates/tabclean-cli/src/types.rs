use std::path::PathBuf;

use tabclean_model::{CleaningReport, Table};

/// Where the active vocabulary came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabularySource {
    BuiltIn,
    File(PathBuf),
}

/// Result of cleaning one input file.
#[derive(Debug)]
pub struct CleanResult {
    pub input: PathBuf,
    /// Written file; `None` on a dry run.
    pub output: Option<PathBuf>,
    pub vocabulary: VocabularySource,
    pub report: CleaningReport,
    pub input_bytes: u64,
    pub output_bytes: Option<u64>,
    /// Leading rows of the input as loaded.
    pub preview: Table,
}

impl CleanResult {
    /// Percentage by which the output is smaller than the input.
    ///
    /// Negative when canonical names lengthen the file. `None` on a dry run
    /// or for an empty input file.
    pub fn size_reduction_percent(&self) -> Option<f64> {
        let output_bytes = self.output_bytes?;
        if self.input_bytes == 0 {
            return None;
        }
        let input = self.input_bytes as f64;
        Some((input - output_bytes as f64) / input * 100.0)
    }
}
