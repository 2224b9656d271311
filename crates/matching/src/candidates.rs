//! Matching a free-text value against a set of known names.

use serde::{Deserialize, Serialize};

use crate::normalize::normalize_name;
use crate::similarity::jaro_winkler;

/// How a value matched a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "score")]
pub enum MatchKind {
    Exact,
    Contains,
    Similar(f64),
}

impl core::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatchKind::Exact => f.write_str("exact match"),
            MatchKind::Contains => f.write_str("substring match"),
            MatchKind::Similar(score) => write!(f, "similarity {score:.2}"),
        }
    }
}

/// A successful match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameMatch {
    /// The candidate as originally supplied (trimmed).
    pub candidate: String,
    pub kind: MatchKind,
}

/// Deduplicated, pre-normalized set of names to match against.
///
/// Names are trimmed; names that are blank, or that normalize to nothing
/// (e.g. `"..."`), are dropped. Duplicates are detected on the normalized form.
#[derive(Debug, Clone, PartialEq)]
pub struct NameCandidates {
    entries: Vec<(String, String)>,
    threshold: f64,
}

impl NameCandidates {
    pub fn new<I, S>(names: I, threshold: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<(String, String)> = Vec::new();
        for name in names {
            let trimmed = name.as_ref().trim();
            if trimmed.is_empty() {
                continue;
            }
            let normalized = normalize_name(trimmed);
            if normalized.is_empty() || entries.iter().any(|(_, n)| *n == normalized) {
                continue;
            }
            entries.push((trimmed.to_string(), normalized));
        }
        Self { entries, threshold }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Original (trimmed) candidate names, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(original, _)| original.as_str())
    }

    /// Find the first candidate `value` matches.
    ///
    /// Candidates are checked in insertion order; for each one, equality, then
    /// containment either way, then Jaro-Winkler against the threshold.
    pub fn find_match(&self, value: &str) -> Option<NameMatch> {
        let normalized = normalize_name(value);
        if normalized.is_empty() {
            return None;
        }

        self.entries.iter().find_map(|(original, candidate)| {
            let kind = if *candidate == normalized {
                MatchKind::Exact
            } else if candidate.contains(normalized.as_str()) || normalized.contains(candidate.as_str()) {
                MatchKind::Contains
            } else {
                let score = jaro_winkler(candidate, &normalized);
                if score < self.threshold {
                    return None;
                }
                MatchKind::Similar(score)
            };
            Some(NameMatch {
                candidate: original.clone(),
                kind,
            })
        })
    }

    pub fn matches(&self, value: &str) -> bool {
        self.find_match(value).is_some()
    }
}
