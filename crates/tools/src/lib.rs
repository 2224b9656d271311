//! `ledgerlens-tools`
//!
//! **Responsibility:** the boundary the agent/orchestration layer calls into.
//!
//! - It does not parse raw model output or touch storage; inputs arrive typed
//!   (or as JSON tool arguments) from the caller.
//! - It holds no global state: build one [`Toolbox`] at startup and pass it around.

pub mod direction_job;
pub mod job;
pub mod ogm_tool;
pub mod result;
pub mod scope;
pub mod toolbox;

pub use direction_job::{DirectionJob, DirectionRequest};
pub use job::DocumentJob;
pub use ogm_tool::OgmTool;
pub use result::ToolError;
pub use scope::{ScopedRunner, TenantScope};
pub use toolbox::Toolbox;
