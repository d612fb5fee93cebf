/// Normalizes a text value for comparison: trims surrounding whitespace, then lowercases.
///
/// Both row comparison keys and synonym lookups go through this function so
/// the two sides of every comparison agree.
pub fn normalize_text(value: &str) -> String {
    value.trim().to_lowercase()
}
