//! Per-reference lookup: parse, resolve, and record the outcome
//!
//! Every input line produces exactly one [`ResolutionResult`]; errors are
//! kept per item so one bad line never stops a batch.

use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::parser::action_ref::parse;
use crate::release::resolver::ReleaseResolver;
use crate::release::source::ReleaseSource;

/// Rendered outcome when a repository has no published release
pub const NO_RELEASES_FOUND: &str = "No releases found";

/// Outcome of looking up one action reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Latest published tag of `name` (`owner/repo`)
    Latest { name: String, tag: String },
    /// The repository has no published release
    NoReleases,
    /// The reference was malformed or the lookup failed
    Failed(String),
}

/// One input reference paired with its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionResult {
    /// Canonical `owner/repo[@version]`, or the trimmed input if it did not parse
    pub original: String,
    /// Version written in the input, if any
    pub current_version: Option<String>,
    pub resolution: Resolution,
}

impl ResolutionResult {
    /// `owner/repo@tag`, `No releases found`, or `Error: ...`
    pub fn resolved(&self) -> String {
        match &self.resolution {
            Resolution::Latest { name, tag } => format!("{}@{}", name, tag),
            Resolution::NoReleases => NO_RELEASES_FOUND.to_string(),
            Resolution::Failed(message) => format!("Error: {}", message),
        }
    }

    /// Whether a pinned version differs from the latest tag
    ///
    /// Bare `owner/repo` references and failed lookups are never outdated.
    pub fn is_outdated(&self) -> bool {
        match (&self.current_version, self.latest_tag()) {
            (Some(current), Some(tag)) => current != tag,
            _ => false,
        }
    }

    /// Latest tag, if the lookup found one
    pub fn latest_tag(&self) -> Option<&str> {
        match &self.resolution {
            Resolution::Latest { tag, .. } => Some(tag),
            _ => None,
        }
    }
}

/// Runs raw action strings through the parser and the release resolver
pub struct ActionLookup<S> {
    resolver: ReleaseResolver<S>,
}

impl<S: ReleaseSource> ActionLookup<S> {
    pub fn new(resolver: ReleaseResolver<S>) -> Self {
        Self { resolver }
    }

    /// Look up a single raw action string
    pub async fn lookup(&self, raw: &str) -> ResolutionResult {
        let reference = match parse(raw) {
            Ok(reference) => reference,
            Err(e) => {
                debug!("Rejected action reference {:?}: {}", raw, e);
                return ResolutionResult {
                    original: raw.trim().to_string(),
                    current_version: None,
                    resolution: Resolution::Failed(e.to_string()),
                };
            }
        };

        let resolution = match self
            .resolver
            .resolve(&reference.owner, &reference.repo)
            .await
        {
            Ok(Some(tag)) => {
                info!("Latest release of {} is {}", reference.name(), tag);
                Resolution::Latest {
                    name: reference.name(),
                    tag,
                }
            }
            Ok(None) => Resolution::NoReleases,
            Err(e) => Resolution::Failed(e.to_string()),
        };

        ResolutionResult {
            original: reference.to_string(),
            current_version: reference.version,
            resolution,
        }
    }

    /// Look up every raw string in order, one request at a time
    pub async fn lookup_all<I, T>(&self, raws: I) -> Vec<ResolutionResult>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut results = Vec::new();
        for raw in raws {
            results.push(self.lookup(raw.as_ref()).await);
        }
        results
    }
}

/// `original -> resolved` in input order; a repeated key keeps its first
/// position and takes the last value
pub fn to_json_map(results: &[ResolutionResult]) -> IndexMap<String, String> {
    let mut map = IndexMap::new();
    for result in results {
        map.insert(result.original.clone(), result.resolved());
    }
    map
}

/// `original -> latest tag` for every successful lookup, as consumed by the updater
pub fn latest_tags(results: &[ResolutionResult]) -> HashMap<String, String> {
    results
        .iter()
        .filter_map(|result| {
            result
                .latest_tag()
                .map(|tag| (result.original.clone(), tag.to_string()))
        })
        .collect()
}
