use thiserror::Error;

/// Failure at the tool boundary.
///
/// The engines themselves never fail; these errors are about how they were invoked.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ToolError {
    #[error("invalid tool input: {0}")]
    InvalidInput(String),

    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("tenant scope violation: {0}")]
    TenantScope(String),

    #[error("failed to encode tool output: {0}")]
    Encoding(String),
}
