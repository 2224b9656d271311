//! Name normalization for comparison.

/// Normalize a free-text name for comparison.
///
/// - lowercase
/// - every character other than `a-z`, `0-9` or whitespace becomes a space
/// - runs of whitespace collapse to a single space
/// - trimmed
///
/// ```
/// use ledgerlens_matching::normalize_name;
///
/// assert_eq!(normalize_name("Invoid.vision"), "invoid vision");
/// assert_eq!(normalize_name("  ACME  N.V. "), "acme n v");
/// ```
pub fn normalize_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_space = true;
    for c in raw.chars().flat_map(char::to_lowercase) {
        let keep = c.is_ascii_lowercase() || c.is_ascii_digit();
        if keep {
            out.push(c);
            prev_space = false;
        } else if !prev_space {
            out.push(' ');
            prev_space = true;
        }
    }
    if out.ends_with(' ') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn punctuation_becomes_word_break() {
        assert_eq!(normalize_name("Invoid.vision"), "invoid vision");
        assert_eq!(normalize_name("Invoid Vision"), "invoid vision");
        assert_eq!(normalize_name("O'Brien & Sons, Ltd."), "o brien sons ltd");
    }

    #[test]
    fn collapses_and_trims_whitespace() {
        assert_eq!(normalize_name("\t Jan   \n Peeters  "), "jan peeters");
        assert_eq!(normalize_name("..."), "");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn non_ascii_letters_are_separators() {
        assert_eq!(normalize_name("Café Zoë"), "caf zo");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: normalization is idempotent.
        #[test]
        fn idempotent(raw in "\\PC{0,40}") {
            let once = normalize_name(&raw);
            prop_assert_eq!(normalize_name(&once), once.clone());
            prop_assert!(!once.starts_with(' ') && !once.ends_with(' '));
            prop_assert!(!once.contains("  "));
        }
    }
}
