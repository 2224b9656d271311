use ledgerlens_core::non_blank;
use ledgerlens_documents::{Direction, FinancialExtractionResult};

/// VAT of the non-tenant party, given an already-resolved direction.
///
/// - Inbound invoice / credit note: the seller.
/// - Outbound invoice / credit note: the buyer.
/// - Inbound receipt: the merchant. An outbound receipt was issued by the tenant
///   itself and has no counterparty VAT on it.
///
/// `None` for `Unknown`, for document kinds without a direction, and for blank VATs.
pub fn resolved_counterparty_vat(
    extraction: &FinancialExtractionResult,
    direction: Direction,
) -> Option<&str> {
    match extraction {
        FinancialExtractionResult::Invoice(inv) | FinancialExtractionResult::CreditNote(inv) => match direction {
            Direction::Inbound => non_blank(inv.seller_vat.as_deref()),
            Direction::Outbound => non_blank(inv.buyer_vat.as_deref()),
            Direction::Unknown => None,
        },
        FinancialExtractionResult::Receipt(receipt) => match direction {
            Direction::Inbound => non_blank(receipt.merchant_vat.as_deref()),
            Direction::Outbound | Direction::Unknown => None,
        },
        FinancialExtractionResult::ProForma(_)
        | FinancialExtractionResult::PurchaseOrder(_)
        | FinancialExtractionResult::Quote(_)
        | FinancialExtractionResult::Unsupported { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerlens_documents::{InvoiceExtraction, ReceiptExtraction};

    fn invoice() -> InvoiceExtraction {
        InvoiceExtraction::new("Seller", "Buyer")
            .with_seller_vat("BE0111111111")
            .with_buyer_vat("BE0222222222")
    }

    #[test]
    fn invoice_sides() {
        let doc = FinancialExtractionResult::Invoice(invoice());
        assert_eq!(resolved_counterparty_vat(&doc, Direction::Inbound), Some("BE0111111111"));
        assert_eq!(resolved_counterparty_vat(&doc, Direction::Outbound), Some("BE0222222222"));
        assert_eq!(resolved_counterparty_vat(&doc, Direction::Unknown), None);

        let credit = FinancialExtractionResult::CreditNote(invoice());
        assert_eq!(resolved_counterparty_vat(&credit, Direction::Inbound), Some("BE0111111111"));
    }

    #[test]
    fn receipt_only_inbound_has_counterparty() {
        let doc = FinancialExtractionResult::Receipt(ReceiptExtraction::new("Shop").with_merchant_vat("BE0333333333"));
        assert_eq!(resolved_counterparty_vat(&doc, Direction::Inbound), Some("BE0333333333"));
        assert_eq!(resolved_counterparty_vat(&doc, Direction::Outbound), None);
    }

    #[test]
    fn blank_vat_is_absent() {
        let doc = FinancialExtractionResult::Invoice(InvoiceExtraction::new("S", "B").with_seller_vat("  "));
        assert_eq!(resolved_counterparty_vat(&doc, Direction::Inbound), None);
    }

    #[test]
    fn non_applicable_kinds() {
        for doc in [
            FinancialExtractionResult::Quote(invoice()),
            FinancialExtractionResult::ProForma(invoice()),
            FinancialExtractionResult::PurchaseOrder(invoice()),
            FinancialExtractionResult::Unsupported { reason: None },
        ] {
            assert_eq!(resolved_counterparty_vat(&doc, Direction::Inbound), None);
            assert_eq!(resolved_counterparty_vat(&doc, Direction::Outbound), None);
        }
    }
}
