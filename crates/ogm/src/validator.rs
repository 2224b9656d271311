use crate::checksum::{checksum_str, group_digits, payload_value};
use crate::config::OgmConfig;
use crate::correction::{Slot, search};
use crate::result::OgmValidationResult;

/// Layout of a reference: `#` bracket symbol, `D` digit, `/` separator.
const LAYOUT: &str = "###DDD/DDDD/DDDDD###";

/// Validator for structured payment references.
///
/// Holds only configuration; construct once and share by reference.
#[derive(Debug, Clone, Copy, Default)]
pub struct OgmValidator {
    config: OgmConfig,
}

impl OgmValidator {
    pub fn new(config: OgmConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OgmConfig {
        &self.config
    }

    /// Validate a reference as written, falling back to OCR correction.
    ///
    /// Surrounding whitespace is ignored. Both `+++` and `***` brackets are
    /// accepted; the normalized form always uses `+++`.
    pub fn validate(&self, raw: &str) -> OgmValidationResult {
        let slots = match parse_layout(raw) {
            Ok(slots) => slots,
            Err(reason) => return OgmValidationResult::InvalidFormat { reason },
        };

        let verdict = evaluate(&slots);
        if verdict.is_valid() {
            return verdict;
        }

        let corrected = search(&slots, self.config.max_corrections, |trial| match evaluate(trial) {
            OgmValidationResult::Valid { normalized } => Some(normalized),
            _ => None,
        });

        match corrected {
            Some((normalized, corrections)) => {
                tracing::debug!(
                    original = raw,
                    normalized = %normalized,
                    corrections = corrections.len(),
                    "OGM reference accepted after OCR correction"
                );
                OgmValidationResult::CorrectedValid {
                    original: raw.to_string(),
                    normalized,
                    corrections,
                }
            }
            None => verdict,
        }
    }
}

/// Split a reference into its twelve digit slots, checking brackets and separators.
fn parse_layout(raw: &str) -> Result<Vec<Slot>, String> {
    let leading = raw.chars().take_while(|c| c.is_whitespace()).count();
    let body: Vec<char> = raw.trim().chars().collect();

    if body.is_empty() {
        return Err("reference is empty".to_string());
    }
    if body.len() != LAYOUT.len() {
        return Err(format!(
            "expected {} characters, found {}",
            LAYOUT.len(),
            body.len()
        ));
    }

    let bracket = body[0];
    if bracket != '+' && bracket != '*' {
        return Err("reference must be enclosed in +++ or ***".to_string());
    }

    let mut slots = Vec::with_capacity(12);
    for (i, (&glyph, expected)) in body.iter().zip(LAYOUT.chars()).enumerate() {
        let position = leading + i;
        match expected {
            '#' if glyph != bracket => {
                return Err(format!("expected '{bracket}' at position {position}, found '{glyph}'"));
            }
            '/' if glyph != '/' => {
                return Err(format!("expected '/' at position {position}, found '{glyph}'"));
            }
            'D' => slots.push(Slot { position, glyph }),
            _ => {}
        }
    }
    Ok(slots)
}

/// Strict verdict for twelve slots: every glyph must be a digit and the checksum must hold.
fn evaluate(slots: &[Slot]) -> OgmValidationResult {
    if let Some(bad) = slots.iter().find(|s| !s.glyph.is_ascii_digit()) {
        return OgmValidationResult::InvalidFormat {
            reason: format!("non-digit character '{}' at position {}", bad.glyph, bad.position),
        };
    }

    let digits: String = slots.iter().map(|s| s.glyph).collect();
    let expected = checksum_str(payload_value(&digits[..10]));
    let actual = &digits[10..];
    if expected == actual {
        OgmValidationResult::Valid {
            normalized: group_digits(&digits),
        }
    } else {
        OgmValidationResult::InvalidChecksum {
            expected,
            actual: actual.to_string(),
        }
    }
}
