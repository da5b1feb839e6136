//! Input sources: action lists, workflow documents, and stdin

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to read an input source; fatal for the whole run
#[derive(Debug, Error)]
pub enum InputError {
    #[error("File '{}' not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("Workflow file '{}' not found", .0.display())]
    WorkflowNotFound(PathBuf),

    #[error("Error reading '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error reading stdin: {0}")]
    Stdin(#[source] io::Error),
}

/// Read a file containing one action per line
///
/// Blank lines and `#` comments are skipped; lines are trimmed.
pub fn read_action_lines(path: &Path) -> Result<Vec<String>, InputError> {
    let content = read(path, InputError::FileNotFound)?;
    Ok(filter_action_lines(content.lines()))
}

/// Read a workflow document in full
pub fn read_workflow(path: &Path) -> Result<String, InputError> {
    read(path, InputError::WorkflowNotFound)
}

/// Read action lines from a reader such as stdin, with the same filtering as files
pub fn action_lines<R: BufRead>(reader: R) -> Result<Vec<String>, InputError> {
    let lines = reader
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(InputError::Stdin)?;
    Ok(filter_action_lines(lines.iter().map(String::as_str)))
}

/// Whether a single line carries an action (not blank, not a comment)
pub fn is_action_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && !trimmed.starts_with('#')
}

fn filter_action_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .filter(|line| is_action_line(line))
        .map(|line| line.trim().to_string())
        .collect()
}

fn read(path: &Path, not_found: fn(PathBuf) -> InputError) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => not_found(path.to_path_buf()),
        _ => InputError::Read {
            path: path.to_path_buf(),
            source,
        },
    })
}
