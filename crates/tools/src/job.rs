use ledgerlens_core::TenantId;

use crate::result::ToolError;

/// A tenant-scoped unit of work over one document.
///
/// Inputs are provided by callers; jobs must not perform IO or mutate shared state.
pub trait DocumentJob: Send + Sync {
    type Output;

    /// The tenant whose document this job inspects.
    fn tenant_id(&self) -> TenantId;

    /// Execute the job.
    fn run(&self) -> Result<Self::Output, ToolError>;
}
