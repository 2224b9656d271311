//! Mod-97 check digits.

use ledgerlens_core::{DomainError, DomainResult};

/// Largest payload (exclusive) that fits the ten payload digits.
pub const PAYLOAD_LIMIT: u64 = 10_000_000_000;

/// Check value for a ten-digit payload: `payload mod 97`, with 97 standing in for 0.
pub fn checksum(payload: u64) -> u8 {
    match (payload % 97) as u8 {
        0 => 97,
        r => r,
    }
}

/// [`checksum`] rendered as exactly two digits.
pub fn checksum_str(payload: u64) -> String {
    format!("{:02}", checksum(payload))
}

/// Build the canonical reference for a payload, e.g. `1234567890` -> `+++123/4567/89002+++`.
pub fn format_reference(payload: u64) -> DomainResult<String> {
    if payload >= PAYLOAD_LIMIT {
        return Err(DomainError::validation(format!(
            "OGM payload {payload} exceeds ten digits"
        )));
    }
    let digits = format!("{payload:010}{}", checksum_str(payload));
    Ok(group_digits(&digits))
}

/// Lay out twelve digits as `+++DDD/DDDD/DDDDD+++`.
pub(crate) fn group_digits(digits: &str) -> String {
    format!("+++{}/{}/{}+++", &digits[0..3], &digits[3..7], &digits[7..12])
}

/// Payload value of an all-digit string.
pub(crate) fn payload_value(digits: &str) -> u64 {
    digits
        .bytes()
        .fold(0u64, |acc, b| acc * 10 + u64::from(b - b'0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remainder_zero_maps_to_97() {
        assert_eq!(checksum(0), 97);
        assert_eq!(checksum(97 * 1_000_000), 97);
        assert_eq!(checksum_str(97), "97");
    }

    #[test]
    fn small_remainders_are_zero_padded() {
        assert_eq!(checksum(1_234_567_890), 2);
        assert_eq!(checksum_str(1_234_567_890), "02");
    }

    #[test]
    fn formats_known_reference() {
        assert_eq!(format_reference(1_234_567_890).unwrap(), "+++123/4567/89002+++");
        assert_eq!(format_reference(42).unwrap(), "+++000/0000/04242+++");
    }

    #[test]
    fn rejects_oversized_payload() {
        assert!(format_reference(PAYLOAD_LIMIT).is_err());
    }

    #[test]
    fn payload_value_parses_digits() {
        assert_eq!(payload_value("0000000042"), 42);
        assert_eq!(payload_value("9999999999"), 9_999_999_999);
    }
}
