//! `ledgerlens-documents` — the data crossing the engine boundary.
//!
//! - [`Tenant`]: who the documents belong to.
//! - [`FinancialExtractionResult`]: typed fields produced by the upstream extraction stage.
//! - [`DirectionResolution`]: the verdict handed to the downstream classification stage.

pub mod direction;
pub mod extraction;
pub mod tenant;

pub use direction::{Direction, DirectionResolution, DirectionSource};
pub use extraction::{FinancialExtractionResult, InvoiceExtraction, ReceiptExtraction};
pub use tenant::{Tenant, TenantType};
