//! Helpers for reading tunables from a key/value source (usually the process environment).

use core::str::FromStr;

use crate::error::{DomainError, DomainResult};

/// Look up `key` and parse it. Missing or blank keys yield `Ok(None)`.
pub fn lookup_parsed<T, F>(lookup: &F, key: &str) -> DomainResult<Option<T>>
where
    T: FromStr,
    T::Err: core::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<T>()
        .map(Some)
        .map_err(|e| DomainError::invalid_config(format!("{key}={raw:?}: {e}")))
}

/// Like [`lookup_parsed`], additionally requiring a finite value in \[0, 1\].
pub fn lookup_unit_interval<F>(lookup: &F, key: &str) -> DomainResult<Option<f64>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup_parsed::<f64, F>(lookup, key)? {
        Some(v) if v.is_finite() && (0.0..=1.0).contains(&v) => Ok(Some(v)),
        Some(v) => Err(DomainError::invalid_config(format!("{key}={v}: must be within [0, 1]"))),
        None => Ok(None),
    }
}
