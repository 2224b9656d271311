use serde::{Deserialize, Serialize};

use ledgerlens_core::{TenantId, normalize_vat};
use ledgerlens_direction::DirectionResolver;
use ledgerlens_documents::{DirectionResolution, FinancialExtractionResult, Tenant};

use crate::job::DocumentJob;
use crate::result::ToolError;

/// Everything the resolver needs for one document, as sent over the tool boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionRequest {
    pub tenant: Tenant,
    pub extraction: FinancialExtractionResult,
    #[serde(default)]
    pub associated_names: Vec<String>,
}

impl DirectionRequest {
    /// Bring every VAT field into canonical form.
    ///
    /// Requests assembled by hand (CLI, fixtures) may carry VATs as printed on the
    /// document; the resolver compares them by exact equality.
    pub fn normalized(mut self) -> Self {
        self.tenant.vat_number = normalize_vat(&self.tenant.vat_number);
        match &mut self.extraction {
            FinancialExtractionResult::Invoice(inv)
            | FinancialExtractionResult::CreditNote(inv)
            | FinancialExtractionResult::ProForma(inv)
            | FinancialExtractionResult::PurchaseOrder(inv)
            | FinancialExtractionResult::Quote(inv) => {
                normalize_opt(&mut inv.seller_vat);
                normalize_opt(&mut inv.buyer_vat);
            }
            FinancialExtractionResult::Receipt(receipt) => normalize_opt(&mut receipt.merchant_vat),
            FinancialExtractionResult::Unsupported { .. } => {}
        }
        self
    }
}

fn normalize_opt(vat: &mut Option<String>) {
    if let Some(v) = vat.as_deref() {
        *vat = Some(normalize_vat(v));
    }
}

/// Direction resolution for one document of one tenant.
#[derive(Debug, Clone, Copy)]
pub struct DirectionJob<'a> {
    resolver: &'a DirectionResolver,
    request: &'a DirectionRequest,
}

impl<'a> DirectionJob<'a> {
    pub fn new(resolver: &'a DirectionResolver, request: &'a DirectionRequest) -> Self {
        Self { resolver, request }
    }
}

impl DocumentJob for DirectionJob<'_> {
    type Output = DirectionResolution;

    fn tenant_id(&self) -> TenantId {
        self.request.tenant.id
    }

    fn run(&self) -> Result<DirectionResolution, ToolError> {
        Ok(self.resolver.resolve(
            &self.request.extraction,
            &self.request.tenant,
            &self.request.associated_names,
        ))
    }
}
