//! `ledgerlens-matching` — name comparison primitives.
//!
//! Domain-agnostic: nothing here knows about tenants or documents.

pub mod candidates;
pub mod normalize;
pub mod similarity;

pub use candidates::{MatchKind, NameCandidates, NameMatch};
pub use normalize::normalize_name;
pub use similarity::{jaro, jaro_winkler};
