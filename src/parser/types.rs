//! Common types for parsers

use std::fmt;

use crate::parser::error::ParseError;

/// A reference to a reusable action (`owner/repo[@version]`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActionReference {
    /// Repository owner (e.g., "actions")
    pub owner: String,
    /// Repository name (e.g., "checkout")
    pub repo: String,
    /// Text after `@`, if the reference had one
    pub version: Option<String>,
}

impl ActionReference {
    /// Returns `owner/repo`
    pub fn name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

impl fmt::Display for ActionReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}/{}@{}", self.owner, self.repo, version),
            None => write!(f, "{}/{}", self.owner, self.repo),
        }
    }
}

/// A `uses:` line found in a workflow document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsesEntry {
    /// Normalized directive text (e.g., "uses: actions/checkout@v4")
    pub raw: String,
    /// Outcome of parsing `raw`
    pub reference: Result<ActionReference, ParseError>,
    /// Byte offset of the version token in the document (start)
    ///
    /// For references without a version this is the position right after
    /// the repository name, so `start_offset == end_offset`.
    pub start_offset: usize,
    /// Byte offset of the version token in the document (end)
    pub end_offset: usize,
    /// Line number (0-indexed)
    pub line: usize,
}

impl UsesEntry {
    /// The version token as written in the document
    pub fn version_token<'a>(&self, document: &'a str) -> &'a str {
        &document[self.start_offset..self.end_offset]
    }
}
