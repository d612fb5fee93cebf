//! Error types for vocabulary loading and construction.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VocabError {
    #[error("failed to read vocabulary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML vocabulary {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse CSV vocabulary {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    #[error("unsupported vocabulary format: {path} (expected .toml or .csv)")]
    UnsupportedFormat { path: PathBuf },

    #[error("empty alias for canonical term '{canonical}'")]
    EmptyAlias { canonical: String },

    #[error("empty canonical term for alias '{alias}'")]
    EmptyCanonical { alias: String },

    #[error("alias '{alias}' maps to both '{existing}' and '{requested}'")]
    ConflictingAlias {
        alias: String,
        existing: String,
        requested: String,
    },
}

impl VocabError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, VocabError>;
