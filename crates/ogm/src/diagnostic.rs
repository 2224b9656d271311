//! Plain-text rendering for callers that only consume natural-language tool output.

use crate::result::{Correction, OgmValidationResult};

const EXPECTED_LAYOUT: &str = "+++XXX/XXXX/XXXXX+++ with 12 digits";

impl OgmValidationResult {
    /// One-line verdict, e.g. `VALID: checksum verified. Normalized: +++123/4567/89002+++`.
    pub fn diagnostic(&self) -> String {
        match self {
            Self::Valid { normalized } => format!("VALID: checksum verified. Normalized: {normalized}"),
            Self::CorrectedValid {
                original,
                normalized,
                corrections,
            } => format!(
                "VALID after OCR correction of {original:?} ({}): checksum verified. Normalized: {normalized}",
                describe(corrections)
            ),
            Self::InvalidFormat { reason } => {
                format!("INVALID: format error, {reason}. Expected {EXPECTED_LAYOUT}.")
            }
            Self::InvalidChecksum { expected, actual } => format!(
                "INVALID: checksum failed, expected {expected} found {actual}. Re-read the payment reference from the document."
            ),
        }
    }
}

impl core::fmt::Display for OgmValidationResult {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.diagnostic())
    }
}

fn describe(corrections: &[Correction]) -> String {
    corrections
        .iter()
        .map(|c| format!("'{}' -> '{}' at position {}", c.from, c.to, c.position))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_line() {
        let r = OgmValidationResult::Valid {
            normalized: "+++123/4567/89002+++".to_string(),
        };
        assert_eq!(r.diagnostic(), "VALID: checksum verified. Normalized: +++123/4567/89002+++");
        assert_eq!(r.to_string(), r.diagnostic());
    }

    #[test]
    fn checksum_line_names_both_values() {
        let r = OgmValidationResult::InvalidChecksum {
            expected: "02".to_string(),
            actual: "99".to_string(),
        };
        assert!(r.diagnostic().starts_with("INVALID: checksum failed, expected 02 found 99"));
    }

    #[test]
    fn corrected_line_lists_substitutions() {
        let r = OgmValidationResult::CorrectedValid {
            original: "+++123/4567/89OO2+++".to_string(),
            normalized: "+++123/4567/89002+++".to_string(),
            corrections: vec![
                Correction { position: 14, from: 'O', to: '0' },
                Correction { position: 15, from: 'O', to: '0' },
            ],
        };
        let line = r.diagnostic();
        assert!(line.starts_with("VALID after OCR correction"));
        assert!(line.contains("'O' -> '0' at position 14, 'O' -> '0' at position 15"));
        assert!(line.ends_with("Normalized: +++123/4567/89002+++"));
    }

    #[test]
    fn format_line_includes_reason() {
        let r = OgmValidationResult::InvalidFormat {
            reason: "reference is empty".to_string(),
        };
        assert!(r.diagnostic().starts_with("INVALID: format error, reference is empty."));
    }
}
