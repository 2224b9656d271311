//! Jaro / Jaro-Winkler string similarity.
//!
//! Standard parameterization: prefix scale 0.1, prefix length capped at 4,
//! match window `max(len) / 2 - 1`. Computed over Unicode scalar values.

const PREFIX_SCALE: f64 = 0.1;
const MAX_PREFIX: usize = 4;

/// Jaro similarity in \[0, 1\]; 1.0 means identical.
///
/// Two empty strings are identical (1.0); one empty string scores 0.0.
pub fn jaro(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let window = (a.len().max(b.len()) / 2).saturating_sub(1);
    let mut a_matched = vec![false; a.len()];
    let mut b_matched = vec![false; b.len()];
    let mut matches = 0usize;

    for (i, ca) in a.iter().enumerate() {
        let lo = i.saturating_sub(window);
        let hi = (i + window + 1).min(b.len());
        for j in lo..hi {
            if !b_matched[j] && b[j] == *ca {
                a_matched[i] = true;
                b_matched[j] = true;
                matches += 1;
                break;
            }
        }
    }

    if matches == 0 {
        return 0.0;
    }

    // Half the number of matched characters that appear in a different order.
    let a_seq = a.iter().zip(&a_matched).filter(|(_, m)| **m).map(|(c, _)| c);
    let b_seq = b.iter().zip(&b_matched).filter(|(_, m)| **m).map(|(c, _)| c);
    let out_of_order = a_seq.zip(b_seq).filter(|(x, y)| x != y).count();
    let transpositions = (out_of_order / 2) as f64;

    let m = matches as f64;
    (m / a.len() as f64 + m / b.len() as f64 + (m - transpositions) / m) / 3.0
}

/// Jaro-Winkler similarity in \[0, 1\]: Jaro boosted by the length of the common prefix.
pub fn jaro_winkler(a: &str, b: &str) -> f64 {
    let j = jaro(a, b);
    let prefix = a
        .chars()
        .zip(b.chars())
        .take(MAX_PREFIX)
        .take_while(|(x, y)| x == y)
        .count() as f64;
    (j + prefix * PREFIX_SCALE * (1.0 - j)).min(1.0)
}
