//! GitHub Actions workflow scanner
//!
//! Finds `uses:` directives line by line with a regex. No YAML structure is
//! interpreted, so any line shaped like a step reference is picked up:
//!
//! ```text
//!       - uses: actions/checkout@v4   # trailing comment
//!         uses: "actions/cache@v3"
//! ```

use regex::Regex;
use tracing::debug;

use crate::parser::action_ref::{is_local_reference, parse};
use crate::parser::types::{ActionReference, UsesEntry};

/// Prefix of container actions, which are not published as releases
const DOCKER_PREFIX: &str = "docker://";

/// Scanner for `uses:` lines in workflow documents
pub struct WorkflowScanner {
    /// Match: [- ]uses: [quote]owner/repo[@version]
    uses_re: Regex,
}

impl WorkflowScanner {
    pub fn new() -> Self {
        Self {
            uses_re: Regex::new(
                r#"^[ \t]*(?:-[ \t]+)?uses:[ \t]*["']?(?P<action>[^\s"'#@]+)(?:@(?P<version>[^\s"'#]*))?"#,
            )
            .unwrap(),
        }
    }

    /// Scan a workflow document and return every `uses:` entry in line order
    ///
    /// Local (`./`, `../`) and `docker://` references are skipped. Entries that
    /// fail to parse are kept with their error so callers can report them.
    pub fn scan(&self, document: &str) -> Vec<UsesEntry> {
        let mut results = Vec::new();
        let mut line_start = 0;

        for (line_num, line) in document.split_inclusive('\n').enumerate() {
            if let Some(entry) = self.scan_line(line, line_num, line_start) {
                results.push(entry);
            }
            line_start += line.len();
        }

        results
    }

    fn scan_line(&self, line: &str, line_num: usize, line_start: usize) -> Option<UsesEntry> {
        let caps = self.uses_re.captures(line)?;
        let action = caps.name("action")?;

        if is_local_reference(action.as_str()) || action.as_str().starts_with(DOCKER_PREFIX) {
            debug!(
                "Skipping non-release reference on line {}: {}",
                line_num + 1,
                action.as_str()
            );
            return None;
        }

        let (start, end) = match caps.name("version") {
            Some(version) => (version.start(), version.end()),
            None => (action.end(), action.end()),
        };

        let raw = format!("uses: {}", &line[action.start()..end]);

        Some(UsesEntry {
            reference: parse(&raw),
            raw,
            start_offset: line_start + start,
            end_offset: line_start + end,
            line: line_num,
        })
    }
}

impl Default for WorkflowScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Scan `document` for `uses:` entries (see [`WorkflowScanner::scan`])
pub fn scan_workflow(document: &str) -> Vec<UsesEntry> {
    WorkflowScanner::new().scan(document)
}

/// Extract the well-formed action references of a workflow, in document order
///
/// Duplicates are preserved as separate entries.
pub fn extract_references(document: &str) -> Vec<ActionReference> {
    scan_workflow(document)
        .into_iter()
        .filter_map(|entry| entry.reference.ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::error::ParseError;

    fn reference(owner: &str, repo: &str, version: Option<&str>) -> ActionReference {
        ActionReference {
            owner: owner.to_string(),
            repo: repo.to_string(),
            version: version.map(str::to_string),
        }
    }

    #[test]
    fn scan_records_version_position() {
        let content = r#"name: CI
on: push
jobs:
  build:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
"#;
        let result = scan_workflow(content);
        assert_eq!(
            result,
            vec![UsesEntry {
                raw: "uses: actions/checkout@v4".to_string(),
                reference: Ok(reference("actions", "checkout", Some("v4"))),
                start_offset: 102,
                end_offset: 104,
                line: 6,
            }]
        );
        assert_eq!(result[0].version_token(content), "v4");
    }

    #[test]
    fn extract_returns_references_in_document_order() {
        let content = r#"name: CI
on: push
jobs:
  test:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - uses: actions/setup-node@v4
      - run: npm test
      - uses: actions/cache@v3
"#;
        assert_eq!(
            extract_references(content),
            vec![
                reference("actions", "checkout", Some("v4")),
                reference("actions", "setup-node", Some("v4")),
                reference("actions", "cache", Some("v3")),
            ]
        );
    }

    #[test]
    fn extract_preserves_duplicates() {
        let content = r#"jobs:
  a:
    steps:
      - uses: actions/checkout@v4
  b:
    steps:
      - uses: actions/checkout@v4
"#;
        assert_eq!(
            extract_references(content),
            vec![
                reference("actions", "checkout", Some("v4")),
                reference("actions", "checkout", Some("v4")),
            ]
        );
    }

    #[test]
    fn scan_handles_quotes_and_trailing_comments() {
        let content = r#"    steps:
      - uses: "actions/checkout@v4"
      - uses: 'actions/cache@v3'
      - uses: actions/setup-go@v5  # go toolchain
"#;
        let result = scan_workflow(content);
        let tokens: Vec<&str> = result.iter().map(|e| e.version_token(content)).collect();
        assert_eq!(tokens, vec!["v4", "v3", "v5"]);
        assert_eq!(result[2].raw, "uses: actions/setup-go@v5");
    }

    #[test]
    fn scan_matches_uses_without_list_marker() {
        let content = "    steps:\n      - name: Checkout\n        uses: actions/checkout@v4\n";
        let result = scan_workflow(content);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].line, 2);
        assert_eq!(result[0].version_token(content), "v4");
    }

    #[test]
    fn scan_tracks_offsets_across_crlf_lines() {
        let content = "steps:\r\n  - uses: actions/checkout@v4\r\n  - uses: actions/cache@v3\r\n";
        let result = scan_workflow(content);
        assert_eq!(result.len(), 2);
        assert_eq!(result[1].line, 2);
        assert_eq!(result[1].version_token(content), "v3");
    }

    #[test]
    fn scan_reference_without_version_has_empty_span_after_name() {
        let content = "      - uses: actions/checkout\n";
        let result = scan_workflow(content);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].reference, Ok(reference("actions", "checkout", None)));
        assert_eq!(result[0].start_offset, result[0].end_offset);
        assert_eq!(result[0].start_offset, "      - uses: actions/checkout".len());
    }

    #[test]
    fn scan_skips_local_and_docker_references() {
        let content = r#"steps:
  - uses: ./.github/actions/setup
  - uses: ../shared/action
  - uses: docker://alpine:3.8
  - uses: actions/checkout@v4
"#;
        let result = scan_workflow(content);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].raw, "uses: actions/checkout@v4");
    }

    #[test]
    fn scan_keeps_malformed_references_with_error() {
        let content = r#"steps:
  - uses: github/codeql-action/init@v3
  - uses: actions/checkout@v4
"#;
        let result = scan_workflow(content);
        assert_eq!(result.len(), 2);
        assert!(matches!(
            result[0].reference,
            Err(ParseError::InvalidFormat(_))
        ));
        assert_eq!(
            extract_references(content),
            vec![reference("actions", "checkout", Some("v4"))]
        );
    }

    #[test]
    fn scan_ignores_unrelated_lines() {
        let content = r#"name: Test Workflow
on:
  push:
    branches: [main]
jobs:
  test:
    runs-on: ubuntu-latest
    steps:
      - name: Echo uses: in a string
        run: echo "uses: actions/checkout@v4"
"#;
        assert!(scan_workflow(content).is_empty());
    }
}
