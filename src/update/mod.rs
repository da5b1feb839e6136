//! Workflow update layer
//! - plan.rs: version bump planning and in-place application
//! - writer.rs: atomic write of the rewritten document

pub mod plan;
pub mod writer;

pub use plan::{UpdateOutcome, VersionEdit, WorkflowEditPlan, apply_updates, plan_updates};
pub use writer::write_atomic;
