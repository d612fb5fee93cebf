use std::collections::BTreeMap;

use tabclean_model::normalize_text;

/// Flat alias -> canonical lookup.
///
/// Aliases are stored normalized (trimmed, lowercased) and lookups normalize
/// their input the same way, so `"USA"`, `" usa "` and `"UsA"` all resolve to
/// the same entry. Only whole values match; `"usabc"` never matches `"usa"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymTable {
    entries: BTreeMap<String, String>,
}

impl SynonymTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an alias. Returns the canonical form previously bound
    /// to the alias, if any.
    pub fn insert(&mut self, alias: &str, canonical: impl Into<String>) -> Option<String> {
        self.entries.insert(normalize_text(alias), canonical.into())
    }

    /// Canonical form for `value`, if `value` is a known alias.
    pub fn lookup(&self, value: &str) -> Option<&str> {
        self.entries.get(&normalize_text(value)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(alias, canonical)` pairs ordered by alias.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(alias, canonical)| (alias.as_str(), canonical.as_str()))
    }
}

impl<A, C> FromIterator<(A, C)> for SynonymTable
where
    A: AsRef<str>,
    C: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (A, C)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (alias, canonical) in iter {
            table.insert(alias.as_ref(), canonical);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn countries() -> SynonymTable {
        [("usa", "United States"), ("UK", "United Kingdom")]
            .into_iter()
            .collect()
    }

    #[test]
    fn lookup_ignores_case_and_surrounding_whitespace() {
        let table = countries();
        assert_eq!(table.lookup("USA"), Some("United States"));
        assert_eq!(table.lookup("  usa\t"), Some("United States"));
        assert_eq!(table.lookup("uk"), Some("United Kingdom"));
    }

    #[test]
    fn lookup_is_exact_match_only() {
        let table = countries();
        assert_eq!(table.lookup("usabc"), None);
        assert_eq!(table.lookup("us a"), None);
        assert_eq!(table.lookup("the usa"), None);
    }

    #[test]
    fn insert_normalizes_alias_and_replaces() {
        let mut table = SynonymTable::new();
        assert_eq!(table.insert(" NYC ", "New York"), None);
        assert_eq!(
            table.insert("nyc", "New York City"),
            Some("New York".to_string())
        );
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("Nyc"), Some("New York City"));
    }

    #[test]
    fn iterates_in_alias_order() {
        let table = countries();
        let pairs: Vec<_> = table.iter().collect();
        assert_eq!(
            pairs,
            vec![("uk", "United Kingdom"), ("usa", "United States")]
        );
    }

    #[test]
    fn empty_table_matches_nothing() {
        let table = SynonymTable::new();
        assert!(table.is_empty());
        assert_eq!(table.lookup("usa"), None);
    }
}
