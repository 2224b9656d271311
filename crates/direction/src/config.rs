use serde::{Deserialize, Serialize};

use ledgerlens_core::DomainResult;
use ledgerlens_core::config::lookup_unit_interval;

pub const ENV_NAME_SIMILARITY_THRESHOLD: &str = "LEDGERLENS_NAME_SIMILARITY_THRESHOLD";
pub const ENV_NAME_MATCH_CONFIDENCE: &str = "LEDGERLENS_NAME_MATCH_CONFIDENCE";
pub const ENV_DEFAULT_HINT_CONFIDENCE: &str = "LEDGERLENS_DEFAULT_HINT_CONFIDENCE";

/// Tunables for [`crate::DirectionResolver`].
///
/// All values live in \[0, 1\]; builder methods clamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Minimum Jaro-Winkler score for two names to count as the same party.
    pub name_similarity_threshold: f64,
    /// Confidence reported for name-based verdicts.
    pub name_match_confidence: f64,
    /// Confidence used for an AI hint that arrives without its own confidence.
    pub default_hint_confidence: f64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            name_similarity_threshold: 0.90,
            name_match_confidence: 0.80,
            default_hint_confidence: 0.60,
        }
    }
}

impl ResolverConfig {
    pub fn with_name_similarity_threshold(mut self, threshold: f64) -> Self {
        self.name_similarity_threshold = clamp_unit(threshold, self.name_similarity_threshold);
        self
    }

    pub fn with_name_match_confidence(mut self, confidence: f64) -> Self {
        self.name_match_confidence = clamp_unit(confidence, self.name_match_confidence);
        self
    }

    pub fn with_default_hint_confidence(mut self, confidence: f64) -> Self {
        self.default_hint_confidence = clamp_unit(confidence, self.default_hint_confidence);
        self
    }

    /// Build from a key/value source, starting from defaults.
    ///
    /// Unset keys keep their default; malformed or out-of-range values are an error.
    pub fn from_lookup<F>(lookup: F) -> DomainResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(v) = lookup_unit_interval(&lookup, ENV_NAME_SIMILARITY_THRESHOLD)? {
            config.name_similarity_threshold = v;
        }
        if let Some(v) = lookup_unit_interval(&lookup, ENV_NAME_MATCH_CONFIDENCE)? {
            config.name_match_confidence = v;
        }
        if let Some(v) = lookup_unit_interval(&lookup, ENV_DEFAULT_HINT_CONFIDENCE)? {
            config.default_hint_confidence = v;
        }
        Ok(config)
    }

    /// Build from the process environment, falling back to defaults on bad input.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok()).unwrap_or_else(|err| {
            tracing::warn!("ignoring resolver configuration from environment: {err}");
            Self::default()
        })
    }
}

fn clamp_unit(value: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn defaults() {
        let c = ResolverConfig::default();
        assert_eq!(c.name_similarity_threshold, 0.90);
        assert_eq!(c.name_match_confidence, 0.80);
        assert_eq!(c.default_hint_confidence, 0.60);
    }

    #[test]
    fn builders_clamp() {
        let c = ResolverConfig::default()
            .with_name_match_confidence(1.4)
            .with_default_hint_confidence(-1.0)
            .with_name_similarity_threshold(f64::NAN);
        assert_eq!(c.name_match_confidence, 1.0);
        assert_eq!(c.default_hint_confidence, 0.0);
        assert_eq!(c.name_similarity_threshold, 0.90);
    }

    #[test]
    fn lookup_overrides_only_present_keys() {
        let c = ResolverConfig::from_lookup(lookup(&[(ENV_NAME_MATCH_CONFIDENCE, "0.75")])).unwrap();
        assert_eq!(c.name_match_confidence, 0.75);
        assert_eq!(c.name_similarity_threshold, 0.90);
    }

    #[test]
    fn lookup_rejects_out_of_range() {
        let err = ResolverConfig::from_lookup(lookup(&[(ENV_NAME_SIMILARITY_THRESHOLD, "2")]));
        assert!(err.is_err());
    }
}
