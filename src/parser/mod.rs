//! Parser layer
//! - action_ref.rs: `owner/repo[@version]` reference parser
//! - workflow.rs: `uses:` line scanner for workflow documents
//! - types.rs: Common types (ActionReference, UsesEntry)
//! - error.rs: ParseError

pub mod action_ref;
pub mod error;
pub mod types;
pub mod workflow;

pub use action_ref::parse;
pub use error::ParseError;
pub use types::{ActionReference, UsesEntry};
pub use workflow::{WorkflowScanner, extract_references, scan_workflow};
