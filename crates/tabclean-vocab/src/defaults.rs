use crate::vocabulary::Vocabulary;

/// Built-in alias -> canonical pairs used when no vocabulary file is given.
pub const DEFAULT_ENTITIES: &[(&str, &str)] = &[
    ("usa", "United States"),
    ("nyc", "New York City"),
    ("uae", "United Arab Emirates"),
    ("uk", "United Kingdom"),
];

/// Vocabulary built from [`DEFAULT_ENTITIES`].
pub fn default_vocabulary() -> Vocabulary {
    let mut vocabulary = Vocabulary::new();
    for (alias, canonical) in DEFAULT_ENTITIES {
        // Built-in pairs are distinct and non-blank.
        if let Err(error) = vocabulary.add_alias(alias, canonical) {
            tracing::warn!(%error, "skipping built-in vocabulary entry");
        }
    }
    vocabulary
}
