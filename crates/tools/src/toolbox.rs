use ledgerlens_direction::{DirectionResolver, ResolverConfig};
use ledgerlens_documents::DirectionResolution;
use ledgerlens_ogm::{OgmConfig, OgmValidator};
use serde::Serialize;

use crate::direction_job::{DirectionJob, DirectionRequest};
use crate::ogm_tool::OgmTool;
use crate::result::ToolError;
use crate::scope::{ScopedRunner, TenantScope};

/// Name under which direction resolution is exposed to the agent layer.
pub const RESOLVE_DIRECTION: &str = "resolve_direction";

/// The engines, configured once at startup.
///
/// Immutable after construction; share it by reference across threads.
#[derive(Debug, Clone)]
pub struct Toolbox {
    resolver: DirectionResolver,
    ogm: OgmTool,
    runner: ScopedRunner,
}

impl Toolbox {
    pub fn new(resolver: ResolverConfig, ogm: OgmConfig, scope: TenantScope) -> Self {
        Self {
            resolver: DirectionResolver::new(resolver),
            ogm: OgmTool::new(OgmValidator::new(ogm)),
            runner: ScopedRunner::new(scope),
        }
    }

    /// Configuration from the process environment (defaults for anything unset).
    pub fn from_env(scope: TenantScope) -> Self {
        Self::new(ResolverConfig::from_env(), OgmConfig::from_env(), scope)
    }

    pub fn resolver(&self) -> &DirectionResolver {
        &self.resolver
    }

    pub fn ogm(&self) -> &OgmTool {
        &self.ogm
    }

    /// Names of the tools reachable through [`Toolbox::call`].
    pub fn tool_names(&self) -> [&'static str; 2] {
        [OgmTool::NAME, RESOLVE_DIRECTION]
    }

    /// Resolve direction for one document, honoring the tenant scope.
    pub fn resolve_direction(&self, request: &DirectionRequest) -> Result<DirectionResolution, ToolError> {
        self.runner.run(DirectionJob::new(&self.resolver, request))
    }

    /// Text-in/text-out dispatch for agent tool calls.
    ///
    /// - `validate_ogm`: `arguments` is the raw reference; returns the diagnostic line.
    /// - `resolve_direction`: `arguments` is a JSON [`DirectionRequest`]; returns the
    ///   resolution as JSON.
    pub fn call(&self, tool: &str, arguments: &str) -> Result<String, ToolError> {
        tracing::debug!(tool, "tool call");
        match tool {
            OgmTool::NAME => Ok(self.ogm.call(arguments)),
            RESOLVE_DIRECTION => {
                let request: DirectionRequest = serde_json::from_str(arguments)
                    .map_err(|e| ToolError::InvalidInput(format!("{RESOLVE_DIRECTION}: {e}")))?;
                let resolution = self.resolve_direction(&request)?;
                encode_output(RESOLVE_DIRECTION, &resolution)
            }
            other => Err(ToolError::UnknownTool(other.to_string())),
        }
    }
}

fn encode_output<T: Serialize>(tool: &str, output: &T) -> Result<String, ToolError> {
    serde_json::to_string(output).map_err(|e| ToolError::Encoding(format!("{tool}: {e}")))
}

impl Default for Toolbox {
    fn default() -> Self {
        Self::new(ResolverConfig::default(), OgmConfig::default(), TenantScope::Any)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerlens_core::TenantId;
    use ledgerlens_documents::{
        Direction, DirectionSource, FinancialExtractionResult, InvoiceExtraction, Tenant, TenantType,
    };

    fn request(tenant_id: TenantId) -> DirectionRequest {
        DirectionRequest {
            tenant: Tenant::new(tenant_id, "Invoid Vision", TenantType::Company).with_vat_number("BE0123456789"),
            extraction: FinancialExtractionResult::Invoice(
                InvoiceExtraction::new("Acme NV", "Invoid Vision")
                    .with_seller_vat("BE0987654321")
                    .with_buyer_vat("BE0123456789"),
            ),
            associated_names: Vec::new(),
        }
    }

    #[test]
    fn resolves_through_scoped_runner() {
        let r = Toolbox::default().resolve_direction(&request(TenantId::new())).unwrap();
        assert_eq!(r.direction, Direction::Inbound);
        assert_eq!(r.source, DirectionSource::VatMatch);
    }

    #[test]
    fn scoped_toolbox_rejects_foreign_tenant() {
        let toolbox = Toolbox::new(
            ResolverConfig::default(),
            OgmConfig::default(),
            TenantScope::Tenant(TenantId::new()),
        );
        let err = toolbox.resolve_direction(&request(TenantId::new())).unwrap_err();
        assert!(matches!(err, ToolError::TenantScope(_)));
    }

    #[test]
    fn call_dispatches_by_name() {
        let toolbox = Toolbox::default();
        assert!(toolbox.call("validate_ogm", "+++123/4567/89002+++").unwrap().starts_with("VALID"));

        let args = serde_json::to_string(&request(TenantId::new())).unwrap();
        let out: serde_json::Value = serde_json::from_str(&toolbox.call(RESOLVE_DIRECTION, &args).unwrap()).unwrap();
        assert_eq!(out["direction"], "inbound");
        assert_eq!(out["counterparty_vat"], "BE0987654321");
    }

    #[test]
    fn call_reports_bad_input() {
        let toolbox = Toolbox::default();
        assert!(matches!(toolbox.call(RESOLVE_DIRECTION, "{"), Err(ToolError::InvalidInput(_))));
        assert_eq!(
            toolbox.call("translate", ""),
            Err(ToolError::UnknownTool("translate".to_string()))
        );
        assert_eq!(toolbox.tool_names(), ["validate_ogm", "resolve_direction"]);
    }

    #[test]
    fn unencodable_output_is_not_reported_as_bad_input() {
        let mut keyed_by_pair = std::collections::HashMap::new();
        keyed_by_pair.insert((1u8, 2u8), "x");
        let err = encode_output(RESOLVE_DIRECTION, &keyed_by_pair).unwrap_err();
        assert!(matches!(err, ToolError::Encoding(_)));
        assert!(err.to_string().starts_with("failed to encode tool output: resolve_direction: "));
    }
}
