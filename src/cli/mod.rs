//! Release workflow behind the command line

pub mod orchestration;

pub use orchestration::{run_release_workflow, ReleaseWorkflowArgs, WorkflowOutcome, WorkflowResult};
