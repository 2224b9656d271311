use serde::{Deserialize, Serialize};

/// One OCR glyph substitution applied to a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    /// Character index (0-based) in the original input.
    pub position: usize,
    pub from: char,
    pub to: char,
}

/// Outcome of validating a structured payment reference.
///
/// Invalid references are reported, not raised, so the caller can react
/// (e.g. ask for a re-read of the document).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OgmValidationResult {
    Valid {
        normalized: String,
    },
    CorrectedValid {
        original: String,
        normalized: String,
        corrections: Vec<Correction>,
    },
    InvalidFormat {
        reason: String,
    },
    InvalidChecksum {
        expected: String,
        actual: String,
    },
}

impl OgmValidationResult {
    /// Valid as written or after correction.
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Valid { .. } | Self::CorrectedValid { .. } => true,
            Self::InvalidFormat { .. } | Self::InvalidChecksum { .. } => false,
        }
    }

    /// Canonical `+++DDD/DDDD/DDDDD+++` form for valid references.
    pub fn normalized(&self) -> Option<&str> {
        match self {
            Self::Valid { normalized } | Self::CorrectedValid { normalized, .. } => Some(normalized.as_str()),
            Self::InvalidFormat { .. } | Self::InvalidChecksum { .. } => None,
        }
    }

    /// The twelve significant digits of a valid reference.
    pub fn digits(&self) -> Option<String> {
        self.normalized()
            .map(|n| n.chars().filter(char::is_ascii_digit).collect())
    }
}
