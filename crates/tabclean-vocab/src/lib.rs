//! Controlled vocabularies for entity canonicalization.
//!
//! A [`Vocabulary`] stores canonical terms together with their aliases and
//! answers queries in both directions. The flat [`SynonymTable`] derived from
//! it is what the cleaning pipeline consults for each text cell.
//!
//! # Example
//!
//! ```ignore
//! use tabclean_vocab::{default_vocabulary, load_vocabulary};
//!
//! let vocabulary = match path {
//!     Some(path) => load_vocabulary(path)?,
//!     None => default_vocabulary(),
//! };
//! let synonyms = vocabulary.synonym_table();
//! assert_eq!(synonyms.lookup(" USA "), Some("United States"));
//! ```

#![deny(unsafe_code)]

mod defaults;
mod error;
mod loader;
mod synonyms;
mod vocabulary;

pub use defaults::{DEFAULT_ENTITIES, default_vocabulary};
pub use error::{Result, VocabError};
pub use loader::{load_vocabulary, parse_vocabulary_csv, parse_vocabulary_toml};
pub use synonyms::SynonymTable;
pub use vocabulary::{Term, Vocabulary};
