use serde::{Deserialize, Serialize};

use ledgerlens_core::Confidence;

/// Whether a document is money owed by the tenant (`Inbound`, e.g. a supplier
/// invoice) or owed to the tenant (`Outbound`, e.g. a sales invoice).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Inbound,
    Outbound,
    #[default]
    Unknown,
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            Direction::Inbound => "inbound",
            Direction::Outbound => "outbound",
            Direction::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Which evidence tier produced a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionSource {
    VatMatch,
    NameMatch,
    AiHint,
    Unknown,
}

/// Direction verdict for one document.
///
/// `reasoning` is always populated; it is stored for audit and review routing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionResolution {
    pub direction: Direction,
    pub source: DirectionSource,
    pub confidence: Confidence,
    pub matched_field: Option<String>,
    pub matched_value: Option<String>,
    pub tenant_vat: Option<String>,
    pub counterparty_vat: Option<String>,
    pub reasoning: String,
}

impl DirectionResolution {
    pub fn new(
        direction: Direction,
        source: DirectionSource,
        confidence: impl Into<Confidence>,
        reasoning: impl Into<String>,
    ) -> Self {
        let reasoning = reasoning.into();
        debug_assert!(!reasoning.trim().is_empty(), "reasoning must be populated");
        Self {
            direction,
            source,
            confidence: confidence.into(),
            matched_field: None,
            matched_value: None,
            tenant_vat: None,
            counterparty_vat: None,
            reasoning,
        }
    }

    /// Terminal "no verdict" result.
    pub fn unknown(reasoning: impl Into<String>) -> Self {
        Self::new(Direction::Unknown, DirectionSource::Unknown, Confidence::ZERO, reasoning)
    }

    pub fn with_match(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.matched_field = Some(field.into());
        self.matched_value = Some(value.into());
        self
    }

    pub fn with_tenant_vat(mut self, vat: Option<&str>) -> Self {
        self.tenant_vat = vat.map(str::to_string);
        self
    }

    pub fn with_counterparty_vat(mut self, vat: Option<&str>) -> Self {
        self.counterparty_vat = vat.map(str::to_string);
        self
    }

    pub fn is_resolved(&self) -> bool {
        self.direction != Direction::Unknown
    }
}
