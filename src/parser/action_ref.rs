//! Action reference parser (`owner/repo[@version]`)

use crate::parser::error::ParseError;
use crate::parser::types::ActionReference;

/// Marker that may precede a reference when it is copied from a workflow
const USES_MARKER: &str = "uses:";

/// Parse a raw action string into an [`ActionReference`]
///
/// Accepts `owner/repo` or `owner/repo@version`, optionally prefixed with
/// `uses:`. Surrounding whitespace is ignored; whitespace inside the path is not.
///
/// # Examples
/// * `"actions/checkout@v4"` -> owner `actions`, repo `checkout`, version `v4`
/// * `"  uses: actions/setup-node "` -> version absent
pub fn parse(raw: &str) -> Result<ActionReference, ParseError> {
    let trimmed = raw.trim();
    let trimmed = trimmed
        .strip_prefix(USES_MARKER)
        .map(str::trim)
        .unwrap_or(trimmed);

    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    if is_local_reference(trimmed) {
        return Err(ParseError::LocalReference(trimmed.to_string()));
    }

    let (path, version) = match trimmed.split_once('@') {
        Some((path, version)) => (path, Some(version.to_string())),
        None => (trimmed, None),
    };

    let (owner, repo) = path
        .split_once('/')
        .filter(|(owner, repo)| is_path_segment(owner) && is_path_segment(repo))
        .ok_or_else(|| ParseError::InvalidFormat(trimmed.to_string()))?;

    Ok(ActionReference {
        owner: owner.to_string(),
        repo: repo.to_string(),
        version,
    })
}

/// Whether the reference points into the current repository (`./` or `../`)
pub fn is_local_reference(action: &str) -> bool {
    action.starts_with("./") || action.starts_with("../")
}

/// Owner and repository names: ASCII letters, digits, `.`, `_`, `-`; never `.` or `..`
fn is_path_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}
