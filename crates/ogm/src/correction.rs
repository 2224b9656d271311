//! Bounded OCR-correction search.
//!
//! Scanners confuse a handful of glyph pairs. At a digit position only the
//! letter-to-digit direction can produce a valid reference, so each letter from
//! the table below is a correction candidate, ranked by its pair's position in
//! the table.
//!
//! Search order is deterministic: fewer corrections first; among corrections of
//! the same size, lexicographic over candidates sorted by (pair rank, position).

use crate::result::Correction;

/// Confusable (digit, letter) pairs, highest priority first.
pub const SUBSTITUTIONS: [(char, char); 5] = [('0', 'O'), ('1', 'I'), ('8', 'B'), ('5', 'S'), ('6', 'G')];

/// A glyph at one of the twelve digit positions of a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Slot {
    /// Character index in the original input.
    pub position: usize,
    pub glyph: char,
}

/// Rank and replacement digit for a confusable letter.
fn replacement(glyph: char) -> Option<(usize, char)> {
    SUBSTITUTIONS
        .iter()
        .position(|&(_, letter)| letter == glyph)
        .map(|rank| (rank, SUBSTITUTIONS[rank].0))
}

/// Find the first corrected variant of `slots` accepted by `accept`.
///
/// Returns the accepted value and the substitutions applied, ordered by position.
pub(crate) fn search<T>(
    slots: &[Slot],
    max_corrections: usize,
    accept: impl Fn(&[Slot]) -> Option<T>,
) -> Option<(T, Vec<Correction>)> {
    // A glyph that is neither a digit nor correctable can never be fixed.
    if slots
        .iter()
        .any(|s| !s.glyph.is_ascii_digit() && replacement(s.glyph).is_none())
    {
        return None;
    }

    let mut candidates: Vec<(usize, usize, char)> = slots
        .iter()
        .enumerate()
        .filter_map(|(idx, s)| replacement(s.glyph).map(|(rank, digit)| (rank, idx, digit)))
        .collect();
    candidates.sort_by_key(|&(rank, idx, _)| (rank, idx));

    let limit = max_corrections.min(candidates.len());
    for size in 1..=limit {
        for combo in Combinations::new(candidates.len(), size) {
            let mut trial = slots.to_vec();
            for &c in &combo {
                let (_, idx, digit) = candidates[c];
                trial[idx].glyph = digit;
            }
            if let Some(found) = accept(&trial) {
                let mut corrections: Vec<Correction> = combo
                    .iter()
                    .map(|&c| {
                        let (_, idx, digit) = candidates[c];
                        Correction {
                            position: slots[idx].position,
                            from: slots[idx].glyph,
                            to: digit,
                        }
                    })
                    .collect();
                corrections.sort_by_key(|c| c.position);
                return Some((found, corrections));
            }
        }
    }
    None
}

/// `k`-element index combinations of `0..n` in lexicographic order.
struct Combinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();

        // Advance: bump the rightmost index that still has room.
        let k = self.indices.len();
        match (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) {
            Some(i) => {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => self.done = true,
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(glyphs: &str) -> Vec<Slot> {
        glyphs
            .chars()
            .enumerate()
            .map(|(position, glyph)| Slot { position, glyph })
            .collect()
    }

    fn all_digits(trial: &[Slot]) -> Option<String> {
        trial
            .iter()
            .all(|s| s.glyph.is_ascii_digit())
            .then(|| trial.iter().map(|s| s.glyph).collect())
    }

    #[test]
    fn combinations_are_lexicographic() {
        let combos: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
        assert_eq!(
            combos,
            vec![vec![0, 1], vec![0, 2], vec![0, 3], vec![1, 2], vec![1, 3], vec![2, 3]]
        );
        assert_eq!(Combinations::new(3, 3).count(), 1);
        assert_eq!(Combinations::new(2, 3).count(), 0);
    }

    #[test]
    fn corrects_every_confusable_letter() {
        let (digits, corrections) = search(&slots("I2345G7B9OSO"), 6, all_digits).unwrap();
        assert_eq!(digits, "123456789050");
        assert_eq!(corrections.len(), 6);
        assert_eq!(corrections[0], Correction { position: 0, from: 'I', to: '1' });
        assert!(corrections.windows(2).all(|w| w[0].position < w[1].position));
    }

    #[test]
    fn respects_correction_bound() {
        assert!(search(&slots("OO0000000000"), 1, all_digits).is_none());
        assert!(search(&slots("OO0000000000"), 2, all_digits).is_some());
    }

    #[test]
    fn unknown_letters_are_not_correctable() {
        assert!(search(&slots("X00000000000"), 4, all_digits).is_none());
    }

    #[test]
    fn fewer_corrections_win_then_pair_order() {
        // Accept anything with at least one substitution: the first trial is a
        // single correction of the highest-priority pair ('O'), leftmost first.
        let first = search(&slots("SOIO00000000"), 4, |trial| {
            Some(trial.iter().map(|s| s.glyph).collect::<String>())
        })
        .unwrap();
        assert_eq!(first.1, vec![Correction { position: 1, from: 'O', to: '0' }]);
    }
}
