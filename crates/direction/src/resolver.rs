use ledgerlens_core::{Confidence, non_blank};
use ledgerlens_documents::{
    Direction, DirectionResolution, DirectionSource, FinancialExtractionResult, InvoiceExtraction,
    ReceiptExtraction, Tenant,
};
use ledgerlens_matching::{NameCandidates, NameMatch};

use crate::config::ResolverConfig;
use crate::counterparty::resolved_counterparty_vat;

/// Evidence-fusion cascade deciding document direction.
///
/// Tiers, strongest first; the first one that yields a verdict wins:
/// 1. VAT match (confidence 1.0)
/// 2. Name match (`name_match_confidence`)
/// 3. AI direction hint from the extraction stage
/// 4. `Unknown` (confidence 0.0)
///
/// Stateless apart from its configuration; share one instance by reference.
#[derive(Debug, Clone, Default)]
pub struct DirectionResolver {
    config: ResolverConfig,
}

impl DirectionResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve direction and counterparty for one document.
    ///
    /// `associated_person_names` are names of people linked to the tenant (owners,
    /// team members) that may appear on documents instead of the company name.
    pub fn resolve(
        &self,
        extraction: &FinancialExtractionResult,
        tenant: &Tenant,
        associated_person_names: &[String],
    ) -> DirectionResolution {
        let resolution = match extraction {
            FinancialExtractionResult::Invoice(inv) | FinancialExtractionResult::CreditNote(inv) => {
                let candidates = self.candidates(tenant, associated_person_names);
                self.resolve_invoice(extraction, inv, tenant, &candidates)
                    .with_tenant_vat(tenant.vat())
            }
            FinancialExtractionResult::Receipt(receipt) => {
                let candidates = self.candidates(tenant, associated_person_names);
                self.resolve_receipt(extraction, receipt, tenant, &candidates)
                    .with_tenant_vat(tenant.vat())
            }
            FinancialExtractionResult::ProForma(_)
            | FinancialExtractionResult::PurchaseOrder(_)
            | FinancialExtractionResult::Quote(_)
            | FinancialExtractionResult::Unsupported { .. } => DirectionResolution::unknown(format!(
                "direction does not apply to {} documents",
                extraction.kind_name()
            )),
        };

        tracing::debug!(
            tenant_id = %tenant.id,
            kind = extraction.kind_name(),
            direction = %resolution.direction,
            source = ?resolution.source,
            confidence = resolution.confidence.value(),
            "direction resolved"
        );

        resolution
    }

    fn candidates(&self, tenant: &Tenant, associated_person_names: &[String]) -> NameCandidates {
        let names = [tenant.legal_name.as_str(), tenant.display_name.as_str()]
            .into_iter()
            .chain(associated_person_names.iter().map(String::as_str));
        NameCandidates::new(names, self.config.name_similarity_threshold)
    }

    fn resolve_invoice(
        &self,
        extraction: &FinancialExtractionResult,
        inv: &InvoiceExtraction,
        tenant: &Tenant,
        candidates: &NameCandidates,
    ) -> DirectionResolution {
        let mut notes: Vec<String> = Vec::new();
        let seller_vat = non_blank(inv.seller_vat.as_deref());
        let buyer_vat = non_blank(inv.buyer_vat.as_deref());

        match tenant.vat() {
            None => notes.push("tenant has no VAT number".to_string()),
            Some(tenant_vat) => match (seller_vat == Some(tenant_vat), buyer_vat == Some(tenant_vat)) {
                (true, true) => {
                    return DirectionResolution::unknown(format!(
                        "ambiguous: tenant VAT {tenant_vat} is both the seller and the buyer VAT (self-referential document)"
                    ));
                }
                (true, false) => {
                    return verdict(
                        extraction,
                        Direction::Outbound,
                        DirectionSource::VatMatch,
                        Confidence::CERTAIN,
                        format!("tenant VAT {tenant_vat} matches the seller VAT; the tenant issued this document"),
                    )
                    .with_match("seller_vat", tenant_vat);
                }
                (false, true) => {
                    return verdict(
                        extraction,
                        Direction::Inbound,
                        DirectionSource::VatMatch,
                        Confidence::CERTAIN,
                        format!("tenant VAT {tenant_vat} matches the buyer VAT; the tenant received this document"),
                    )
                    .with_match("buyer_vat", tenant_vat);
                }
                (false, false) if seller_vat.is_none() && buyer_vat.is_none() => {
                    notes.push("document carries no VAT numbers".to_string());
                }
                (false, false) => {
                    notes.push(format!("tenant VAT {tenant_vat} matches neither seller nor buyer VAT"));
                }
            },
        }

        let seller = candidates.find_match(&inv.seller_name);
        let buyer = candidates.find_match(&inv.buyer_name);
        match (seller, buyer) {
            (Some(m), None) => {
                return self.name_verdict(extraction, Direction::Outbound, "seller", inv.seller_name.trim(), &m);
            }
            (None, Some(m)) => {
                return self.name_verdict(extraction, Direction::Inbound, "buyer", inv.buyer_name.trim(), &m);
            }
            (Some(_), Some(_)) => notes.push("both seller and buyer names match the tenant".to_string()),
            (None, None) => notes.push(no_name_match_note(candidates, "neither seller nor buyer name")),
        }

        self.hint_or_unknown(extraction, inv.direction_hint, inv.direction_hint_confidence, notes)
    }

    fn resolve_receipt(
        &self,
        extraction: &FinancialExtractionResult,
        receipt: &ReceiptExtraction,
        tenant: &Tenant,
        candidates: &NameCandidates,
    ) -> DirectionResolution {
        let mut notes: Vec<String> = Vec::new();
        let merchant_vat = non_blank(receipt.merchant_vat.as_deref());

        match (tenant.vat(), merchant_vat) {
            (Some(tenant_vat), Some(merchant_vat)) if merchant_vat == tenant_vat => {
                return verdict(
                    extraction,
                    Direction::Outbound,
                    DirectionSource::VatMatch,
                    Confidence::CERTAIN,
                    format!("merchant VAT {merchant_vat} is the tenant VAT; the tenant issued this receipt"),
                )
                .with_match("merchant_vat", merchant_vat);
            }
            (Some(_), Some(merchant_vat)) => {
                return verdict(
                    extraction,
                    Direction::Inbound,
                    DirectionSource::VatMatch,
                    Confidence::CERTAIN,
                    format!("merchant VAT {merchant_vat} differs from the tenant VAT; the tenant made this purchase"),
                )
                .with_match("merchant_vat", merchant_vat);
            }
            (None, _) => notes.push("tenant has no VAT number".to_string()),
            (Some(_), None) => notes.push("receipt carries no merchant VAT".to_string()),
        }

        match non_blank(receipt.merchant_name.as_deref()).map(str::trim) {
            Some(merchant) => match candidates.find_match(merchant) {
                Some(m) => self.name_verdict(extraction, Direction::Outbound, "merchant", merchant, &m),
                // A merchant that is not the tenant means the tenant was the customer.
                None => verdict(
                    extraction,
                    Direction::Inbound,
                    DirectionSource::NameMatch,
                    self.config.name_match_confidence,
                    format!("merchant '{merchant}' is not the tenant; the tenant made this purchase"),
                )
                .with_match("merchant_name", merchant),
            },
            None => {
                notes.push("receipt has no merchant name".to_string());
                self.hint_or_unknown(extraction, receipt.direction_hint, receipt.direction_hint_confidence, notes)
            }
        }
    }

    fn name_verdict(
        &self,
        extraction: &FinancialExtractionResult,
        direction: Direction,
        role: &str,
        value: &str,
        name_match: &NameMatch,
    ) -> DirectionResolution {
        verdict(
            extraction,
            direction,
            DirectionSource::NameMatch,
            self.config.name_match_confidence,
            format!(
                "{role} name '{value}' matches tenant name '{}' ({})",
                name_match.candidate, name_match.kind
            ),
        )
        .with_match(format!("{role}_name"), value)
    }

    fn hint_or_unknown(
        &self,
        extraction: &FinancialExtractionResult,
        hint: Direction,
        hint_confidence: Option<f64>,
        mut notes: Vec<String>,
    ) -> DirectionResolution {
        match hint {
            Direction::Inbound | Direction::Outbound => {
                let (confidence, origin) = match hint_confidence.filter(|c| c.is_finite()) {
                    Some(c) => (Confidence::new(c), "reported"),
                    None => (Confidence::new(self.config.default_hint_confidence), "default"),
                };
                verdict(
                    extraction,
                    hint,
                    DirectionSource::AiHint,
                    confidence,
                    format!(
                        "no deterministic evidence ({}); using AI hint '{hint}' with {origin} confidence {confidence}",
                        notes.join("; ")
                    ),
                )
            }
            Direction::Unknown => {
                notes.push("no AI direction hint".to_string());
                DirectionResolution::unknown(format!("insufficient evidence: {}", notes.join("; ")))
            }
        }
    }
}

fn verdict(
    extraction: &FinancialExtractionResult,
    direction: Direction,
    source: DirectionSource,
    confidence: impl Into<Confidence>,
    reasoning: String,
) -> DirectionResolution {
    DirectionResolution::new(direction, source, confidence, reasoning)
        .with_counterparty_vat(resolved_counterparty_vat(extraction, direction))
}

fn no_name_match_note(candidates: &NameCandidates, subject: &str) -> String {
    if candidates.is_empty() {
        "tenant has no names to compare against".to_string()
    } else {
        format!("{subject} matches any of {} tenant name(s)", candidates.len())
    }
}
