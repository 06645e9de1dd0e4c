//! Unit symbol normalization

/// Normalize a unit symbol: trim surrounding whitespace, lowercase.
///
/// This is the only text processing applied to symbols. It is idempotent.
pub fn normalize_symbol(s: &str) -> String {
    s.trim().to_lowercase()
}
