use serde::{Deserialize, Serialize};

use crate::direction::Direction;

/// Party fields extracted from invoice-shaped documents.
///
/// VAT fields are pre-normalized by the extraction stage. Blank names and VATs
/// are treated as absent evidence.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InvoiceExtraction {
    #[serde(default)]
    pub seller_name: String,
    #[serde(default)]
    pub seller_vat: Option<String>,
    #[serde(default)]
    pub buyer_name: String,
    #[serde(default)]
    pub buyer_vat: Option<String>,
    #[serde(default)]
    pub direction_hint: Direction,
    #[serde(default)]
    pub direction_hint_confidence: Option<f64>,
}

impl InvoiceExtraction {
    pub fn new(seller_name: impl Into<String>, buyer_name: impl Into<String>) -> Self {
        Self {
            seller_name: seller_name.into(),
            buyer_name: buyer_name.into(),
            ..Self::default()
        }
    }

    pub fn with_seller_vat(mut self, vat: impl Into<String>) -> Self {
        self.seller_vat = Some(vat.into());
        self
    }

    pub fn with_buyer_vat(mut self, vat: impl Into<String>) -> Self {
        self.buyer_vat = Some(vat.into());
        self
    }

    pub fn with_hint(mut self, hint: Direction, confidence: Option<f64>) -> Self {
        self.direction_hint = hint;
        self.direction_hint_confidence = confidence;
        self
    }
}

/// Merchant fields extracted from a receipt.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReceiptExtraction {
    #[serde(default)]
    pub merchant_name: Option<String>,
    #[serde(default)]
    pub merchant_vat: Option<String>,
    #[serde(default)]
    pub direction_hint: Direction,
    #[serde(default)]
    pub direction_hint_confidence: Option<f64>,
}

impl ReceiptExtraction {
    pub fn new(merchant_name: impl Into<String>) -> Self {
        Self {
            merchant_name: Some(merchant_name.into()),
            ..Self::default()
        }
    }

    pub fn with_merchant_vat(mut self, vat: impl Into<String>) -> Self {
        self.merchant_vat = Some(vat.into());
        self
    }

    pub fn with_hint(mut self, hint: Direction, confidence: Option<f64>) -> Self {
        self.direction_hint = hint;
        self.direction_hint_confidence = confidence;
        self
    }
}

/// Structured extraction for one document, tagged by document kind.
///
/// Direction is only defined for invoices, credit notes and receipts. The other
/// kinds may still carry party fields (extraction fills them when it can), but the
/// resolver never looks at them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FinancialExtractionResult {
    Invoice(InvoiceExtraction),
    CreditNote(InvoiceExtraction),
    Receipt(ReceiptExtraction),
    ProForma(InvoiceExtraction),
    PurchaseOrder(InvoiceExtraction),
    Quote(InvoiceExtraction),
    Unsupported {
        #[serde(default)]
        reason: Option<String>,
    },
}

impl FinancialExtractionResult {
    /// Stable snake_case label of the document kind (matches the serde tag).
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Invoice(_) => "invoice",
            Self::CreditNote(_) => "credit_note",
            Self::Receipt(_) => "receipt",
            Self::ProForma(_) => "pro_forma",
            Self::PurchaseOrder(_) => "purchase_order",
            Self::Quote(_) => "quote",
            Self::Unsupported { .. } => "unsupported",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_tagged_invoice() {
        let json = r#"{
            "kind": "credit_note",
            "seller_name": "Acme BV",
            "seller_vat": "BE0123456789",
            "buyer_name": "Invoid Vision",
            "direction_hint": "inbound",
            "direction_hint_confidence": 0.7
        }"#;
        let parsed: FinancialExtractionResult = serde_json::from_str(json).unwrap();
        match parsed {
            FinancialExtractionResult::CreditNote(inv) => {
                assert_eq!(inv.seller_vat.as_deref(), Some("BE0123456789"));
                assert_eq!(inv.buyer_vat, None);
                assert_eq!(inv.direction_hint, Direction::Inbound);
            }
            other => panic!("expected credit note, got {other:?}"),
        }
    }

    #[test]
    fn unsupported_without_payload() {
        let parsed: FinancialExtractionResult = serde_json::from_str(r#"{"kind":"unsupported"}"#).unwrap();
        assert_eq!(parsed, FinancialExtractionResult::Unsupported { reason: None });
        assert_eq!(parsed.kind_name(), "unsupported");
    }

    #[test]
    fn missing_hint_defaults_to_unknown() {
        let parsed: FinancialExtractionResult =
            serde_json::from_str(r#"{"kind":"receipt","merchant_name":"Delhaize"}"#).unwrap();
        let FinancialExtractionResult::Receipt(receipt) = parsed else {
            panic!("expected receipt");
        };
        assert_eq!(receipt.direction_hint, Direction::Unknown);
        assert_eq!(receipt.direction_hint_confidence, None);
    }
}
