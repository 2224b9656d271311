use ledgerlens_core::TenantId;

use crate::job::DocumentJob;
use crate::result::ToolError;

/// Which tenants' documents a [`ScopedRunner`] may inspect.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TenantScope {
    /// Unrestricted (CLI, shared agent sessions).
    Any,
    /// Bound to a single tenant.
    Tenant(TenantId),
}

impl TenantScope {
    pub fn allows(&self, tenant_id: TenantId) -> bool {
        match self {
            TenantScope::Any => true,
            TenantScope::Tenant(bound) => *bound == tenant_id,
        }
    }
}

/// Runs document jobs in-process after checking them against a tenant scope.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScopedRunner {
    scope: TenantScope,
}

impl ScopedRunner {
    pub fn new(scope: TenantScope) -> Self {
        Self { scope }
    }

    pub fn scope(&self) -> TenantScope {
        self.scope
    }

    /// Run `job` if its tenant is in scope.
    pub fn run<J: DocumentJob>(&self, job: J) -> Result<J::Output, ToolError> {
        let tenant_id = job.tenant_id();
        if !self.scope.allows(tenant_id) {
            tracing::warn!(%tenant_id, scope = ?self.scope, "document belongs to another tenant");
            return Err(ToolError::TenantScope(format!(
                "document of tenant {tenant_id} is outside the runner's tenant scope"
            )));
        }
        job.run()
    }
}
