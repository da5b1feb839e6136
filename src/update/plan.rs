//! Version bump planning for workflow documents
//!
//! Edits touch only the version token after `@`; every other byte of the
//! document is left as it was.

use std::collections::HashMap;

use tracing::debug;

use crate::parser::workflow::scan_workflow;

/// Replacement of one version token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionEdit {
    /// `owner/repo` of the edited reference
    pub name: String,
    /// Line number (0-indexed)
    pub line: usize,
    /// Byte offset of the old token in the document (start)
    pub start_offset: usize,
    /// Byte offset of the old token in the document (end)
    pub end_offset: usize,
    pub old_version: String,
    pub new_version: String,
}

/// Ordered set of edits for one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowEditPlan {
    pub edits: Vec<VersionEdit>,
}

impl WorkflowEditPlan {
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Number of lines the plan changes
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    /// Apply the edits to the document they were planned from
    pub fn apply(&self, document: &str) -> String {
        let mut updated = document.to_string();
        // Back to front so earlier offsets stay valid
        for edit in self.edits.iter().rev() {
            updated.replace_range(edit.start_offset..edit.end_offset, &edit.new_version);
        }
        updated
    }
}

/// Result of [`apply_updates`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub document: String,
    pub plan: WorkflowEditPlan,
}

impl UpdateOutcome {
    pub fn updated_count(&self) -> usize {
        self.plan.len()
    }
}

/// Plan version bumps for every `uses:` line with a known latest tag
///
/// `resolutions` maps the canonical reference (`owner/repo@version`) to the
/// latest tag. References without a version token are not updatable and
/// are skipped, as are lines whose token already equals the latest tag.
pub fn plan_updates(document: &str, resolutions: &HashMap<String, String>) -> WorkflowEditPlan {
    let edits = scan_workflow(document)
        .into_iter()
        .filter_map(|entry| {
            let reference = entry.reference.ok()?;
            let Some(current) = reference.version.as_deref() else {
                debug!(
                    "Skipping {} on line {}: no version to update",
                    reference.name(),
                    entry.line + 1
                );
                return None;
            };

            let latest = resolutions.get(&reference.to_string())?;
            if latest == current {
                return None;
            }

            Some(VersionEdit {
                name: reference.name(),
                line: entry.line,
                start_offset: entry.start_offset,
                end_offset: entry.end_offset,
                old_version: current.to_string(),
                new_version: latest.clone(),
            })
        })
        .collect();

    WorkflowEditPlan { edits }
}

/// Plan and apply version bumps in one step
///
/// When nothing changes the returned document is byte-identical to the input.
pub fn apply_updates(document: &str, resolutions: &HashMap<String, String>) -> UpdateOutcome {
    let plan = plan_updates(document, resolutions);
    UpdateOutcome {
        document: plan.apply(document),
        plan,
    }
}
