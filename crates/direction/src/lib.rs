//! `ledgerlens-direction`
//!
//! **Responsibility:** decide, per document, which party is the tenant and
//! whether the document is money owed by the tenant (inbound) or to it (outbound).
//!
//! The resolver is pure and total: it never fails, performs no IO, and reports
//! ambiguity or missing evidence as an `Unknown` verdict with a reason.

pub mod config;
pub mod counterparty;
pub mod resolver;

pub use config::ResolverConfig;
pub use counterparty::resolved_counterparty_vat;
pub use resolver::DirectionResolver;
