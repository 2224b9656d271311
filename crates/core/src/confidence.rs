//! Bounded confidence score attached to every verdict.

use serde::{Deserialize, Serialize};

/// A confidence score in \[0, 1\].
///
/// The bound is enforced on construction: out-of-range inputs are clamped and
/// `NaN` becomes `0.0`, so every `Confidence` in the system satisfies the bound.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Confidence(f64);

impl Confidence {
    pub const ZERO: Confidence = Confidence(0.0);
    pub const CERTAIN: Confidence = Confidence(1.0);

    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(value: Confidence) -> Self {
        value.0
    }
}

impl core::fmt::Display for Confidence {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn clamps_out_of_range_values() {
        assert_eq!(Confidence::new(1.7).value(), 1.0);
        assert_eq!(Confidence::new(-0.2).value(), 0.0);
        assert_eq!(Confidence::new(f64::NAN).value(), 0.0);
        assert_eq!(Confidence::new(f64::INFINITY).value(), 1.0);
        assert_eq!(Confidence::new(0.55).value(), 0.55);
    }

    #[test]
    fn deserializing_clamps_too() {
        let c: Confidence = serde_json::from_str("3.5").unwrap();
        assert_eq!(c, Confidence::CERTAIN);
        assert_eq!(serde_json::to_string(&Confidence::new(0.8)).unwrap(), "0.8");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: any f64 yields a confidence inside the unit interval.
        #[test]
        fn always_within_unit_interval(raw in proptest::num::f64::ANY) {
            let c = Confidence::new(raw).value();
            prop_assert!((0.0..=1.0).contains(&c));
        }
    }
}
