//! `ledgerlens-core` — shared building blocks for the document classification engines.
//!
//! This crate contains **pure** primitives (no infrastructure concerns).

pub mod confidence;
pub mod config;
pub mod error;
pub mod id;
pub mod vat;

pub use error::{DomainError, DomainResult};
pub use id::TenantId;
pub use confidence::Confidence;
pub use vat::{non_blank, normalize_vat};
