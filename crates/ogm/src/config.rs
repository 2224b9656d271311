use serde::{Deserialize, Serialize};

use ledgerlens_core::config::lookup_parsed;
use ledgerlens_core::{DomainError, DomainResult};

pub const ENV_MAX_CORRECTIONS: &str = "LEDGERLENS_OGM_MAX_CORRECTIONS";

/// A reference has twelve digit positions; no search can correct more.
pub const DIGIT_SLOTS: usize = 12;

/// Tunables for [`crate::OgmValidator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OgmConfig {
    /// Most glyphs corrected at once. `0` disables OCR correction.
    pub max_corrections: usize,
}

impl Default for OgmConfig {
    fn default() -> Self {
        Self { max_corrections: 4 }
    }
}

impl OgmConfig {
    pub fn with_max_corrections(mut self, max_corrections: usize) -> Self {
        self.max_corrections = max_corrections.min(DIGIT_SLOTS);
        self
    }

    pub fn from_lookup<F>(lookup: F) -> DomainResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(max) = lookup_parsed::<usize, F>(&lookup, ENV_MAX_CORRECTIONS)? {
            if max > DIGIT_SLOTS {
                return Err(DomainError::invalid_config(format!(
                    "{ENV_MAX_CORRECTIONS}={max}: at most {DIGIT_SLOTS}"
                )));
            }
            config.max_corrections = max;
        }
        Ok(config)
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok()).unwrap_or_else(|err| {
            tracing::warn!("ignoring OGM configuration from environment: {err}");
            Self::default()
        })
    }
}
