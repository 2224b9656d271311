//! `ledgerlens-ogm` — Belgian structured payment references (OGM / "gestructureerde mededeling").
//!
//! A reference is written `+++AAA/BBBB/CCCYY+++` (or with `***`): ten payload digits
//! followed by a two-digit mod-97 check value.
//!
//! [`OgmValidator::validate`] checks layout and checksum and, when the reference
//! came from a scan, tries a bounded set of OCR glyph corrections before giving up.

pub mod checksum;
pub mod config;
pub mod correction;
pub mod diagnostic;
pub mod result;
pub mod validator;

pub use checksum::{checksum, checksum_str, format_reference};
pub use config::OgmConfig;
pub use correction::SUBSTITUTIONS;
pub use result::{Correction, OgmValidationResult};
pub use validator::OgmValidator;
