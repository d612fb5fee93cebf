//! Canonical terms and their aliases.

use std::collections::BTreeMap;

use serde::Serialize;
use tabclean_model::normalize_text;

use crate::error::{Result, VocabError};
use crate::synonyms::SynonymTable;

/// A canonical display form together with the aliases that resolve to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Term {
    /// The display string every alias is rewritten to (e.g. "United States").
    pub canonical: String,

    /// Normalized aliases in the order they were added.
    pub aliases: Vec<String>,
}

/// Vocabulary storage.
///
/// Keeps both directions of the alias relation: canonical term -> aliases for
/// listing and inspection, alias -> canonical for lookups. The cleaning
/// pipeline does not use this type directly; it consumes the flat
/// [`SynonymTable`] produced by [`Vocabulary::synonym_table`].
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Key: canonical display string.
    terms: BTreeMap<String, Term>,

    /// Key: normalized alias. Value: canonical display string.
    alias_index: BTreeMap<String, String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `alias` to `canonical`.
    ///
    /// Adding a pair that already exists is a no-op. An alias that is blank
    /// after trimming, a blank canonical term, or an alias already bound to a
    /// different canonical term is rejected.
    pub fn add_alias(&mut self, alias: &str, canonical: &str) -> Result<()> {
        let canonical = canonical.trim();
        let key = normalize_text(alias);
        if canonical.is_empty() {
            return Err(VocabError::EmptyCanonical {
                alias: alias.to_string(),
            });
        }
        if key.is_empty() {
            return Err(VocabError::EmptyAlias {
                canonical: canonical.to_string(),
            });
        }
        if let Some(existing) = self.alias_index.get(&key) {
            if existing == canonical {
                return Ok(());
            }
            return Err(VocabError::ConflictingAlias {
                alias: key,
                existing: existing.clone(),
                requested: canonical.to_string(),
            });
        }

        self.terms
            .entry(canonical.to_string())
            .or_insert_with(|| Term {
                canonical: canonical.to_string(),
                aliases: Vec::new(),
            })
            .aliases
            .push(key.clone());
        self.alias_index.insert(key, canonical.to_string());
        Ok(())
    }

    /// Adds every pair, stopping at the first rejected one.
    pub fn extend<'a, I>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (alias, canonical) in pairs {
            self.add_alias(alias, canonical)?;
        }
        Ok(())
    }

    /// Canonical term an alias resolves to.
    pub fn canonical_for(&self, alias: &str) -> Option<&str> {
        self.alias_index
            .get(&normalize_text(alias))
            .map(String::as_str)
    }

    /// Aliases bound to a canonical term (exact canonical match).
    pub fn aliases_of(&self, canonical: &str) -> &[String] {
        self.terms
            .get(canonical)
            .map(|term| term.aliases.as_slice())
            .unwrap_or_default()
    }

    /// Terms ordered by canonical form.
    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.terms.values()
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    pub fn alias_count(&self) -> usize {
        self.alias_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alias_index.is_empty()
    }

    /// Flat lookup table used by canonicalization.
    pub fn synonym_table(&self) -> SynonymTable {
        self.alias_index
            .iter()
            .map(|(alias, canonical)| (alias.as_str(), canonical.clone()))
            .collect()
    }
}
