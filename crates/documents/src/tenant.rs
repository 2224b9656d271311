use serde::{Deserialize, Serialize};

use ledgerlens_core::TenantId;

/// Legal form of a tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TenantType {
    Freelancer,
    Company,
}

/// Tenant profile as loaded by the caller.
///
/// `vat_number` is expected in normalized form (see [`ledgerlens_core::normalize_vat`]);
/// an empty string means the tenant has no VAT registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: TenantId,
    pub legal_name: String,
    pub display_name: String,
    #[serde(default)]
    pub vat_number: String,
    #[serde(rename = "type")]
    pub tenant_type: TenantType,
    pub language: String,
}

impl Tenant {
    pub fn new(id: TenantId, legal_name: impl Into<String>, tenant_type: TenantType) -> Self {
        let legal_name = legal_name.into();
        Self {
            id,
            display_name: legal_name.clone(),
            legal_name,
            vat_number: String::new(),
            tenant_type,
            language: "en".to_string(),
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn with_vat_number(mut self, vat_number: impl Into<String>) -> Self {
        self.vat_number = vat_number.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// The tenant VAT if one is registered.
    pub fn vat(&self) -> Option<&str> {
        ledgerlens_core::non_blank(Some(self.vat_number.as_str()))
    }
}
