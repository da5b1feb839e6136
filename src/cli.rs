//! Command line interface

use std::path::PathBuf;

use clap::Parser;

use crate::config::DEFAULT_API_BASE_URL;

const EXAMPLES: &str = "\
Examples:
  action-latest actions/checkout@v4
  action-latest actions/setup-python
  action-latest -f actions.txt --json
  action-latest -w .github/workflows/ci.yml
  action-latest -w .github/workflows/ci.yml --update
  action-latest --stdin
  echo actions/checkout@v4 | action-latest --json";

#[derive(Debug, Parser)]
#[command(name = "action-latest")]
#[command(version, about = "Look up the latest release of GitHub Actions")]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Action string in format 'owner/repo@version' or 'owner/repo'
    #[arg(conflicts_with_all = ["file", "workflow", "stdin"])]
    pub action: Option<String>,

    /// File containing one action per line
    #[arg(short, long, conflicts_with_all = ["workflow", "stdin"])]
    pub file: Option<PathBuf>,

    /// GitHub workflow file to extract and process actions from
    #[arg(short, long, conflicts_with = "stdin")]
    pub workflow: Option<PathBuf>,

    /// Read action strings from stdin (interactive mode)
    #[arg(long)]
    pub stdin: bool,

    /// GitHub token for authenticated requests
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Rewrite the workflow file in place with the latest versions
    #[arg(short, long, requires = "workflow", conflicts_with = "json")]
    pub update: bool,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_url: String,

    /// Write logs as JSON lines to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Where the action strings come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Single(String),
    File(PathBuf),
    Workflow { path: PathBuf, update: bool },
    /// Interactive stdin, with a prompt
    Stdin,
    /// Stdin that is not a terminal, read without a prompt
    Piped,
}

impl Cli {
    /// Pick the input mode; `None` means nothing to do (print help)
    ///
    /// Piped stdin is only used when no other source was given.
    pub fn input_mode(&self, stdin_is_piped: bool) -> Option<InputMode> {
        if let Some(path) = &self.workflow {
            Some(InputMode::Workflow {
                path: path.clone(),
                update: self.update,
            })
        } else if let Some(path) = &self.file {
            Some(InputMode::File(path.clone()))
        } else if self.stdin {
            Some(InputMode::Stdin)
        } else if let Some(action) = &self.action {
            Some(InputMode::Single(action.clone()))
        } else if stdin_is_piped {
            Some(InputMode::Piped)
        } else {
            None
        }
    }
}
