//! VAT identifier normalization.
//!
//! The engines compare VAT numbers by exact string equality, so every VAT that
//! reaches them must already be in canonical form: uppercase, no whitespace or
//! punctuation, country prefix kept (`"be 0123.456.789"` -> `"BE0123456789"`).

/// Canonicalize a VAT identifier for exact-match comparison.
pub fn normalize_vat(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// The value if it is present and not blank.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
