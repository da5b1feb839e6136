use serde::Deserialize;

/// One row of the releases listing
///
/// Only the fields needed for resolution are kept. Both are required: a
/// response missing either one is rejected instead of guessed at.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReleaseInfo {
    pub tag_name: String,
    pub draft: bool,
}

impl ReleaseInfo {
    pub fn new(tag_name: impl Into<String>, draft: bool) -> Self {
        Self {
            tag_name: tag_name.into(),
            draft,
        }
    }
}

/// Tag of the first non-draft release, in the order given
pub fn latest_published(releases: &[ReleaseInfo]) -> Option<&str> {
    releases
        .iter()
        .find(|release| !release.draft)
        .map(|release| release.tag_name.as_str())
}
