//! Runs one invocation: read the selected input, resolve, print, optionally rewrite

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::CommandFactory;
use tracing::info;

use crate::cli::{Cli, InputMode};
use crate::config::ResolverConfig;
use crate::input::{InputError, action_lines, is_action_line, read_action_lines, read_workflow};
use crate::lookup::{ActionLookup, ResolutionResult, latest_tags, to_json_map};
use crate::parser::workflow::scan_workflow;
use crate::release::github::GitHubReleaseSource;
use crate::release::resolver::ReleaseResolver;
use crate::release::source::ReleaseSource;
use crate::update::plan::apply_updates;
use crate::update::writer::write_atomic;

pub const NO_ACTIONS_FOUND: &str = "No actions found in workflow file";
pub const NO_UPDATES_NEEDED: &str = "No updates needed";
const STDIN_PROMPT: &str = "Enter action strings (one per line, Ctrl+D to finish):";

/// Entry point behind `main`
///
/// Missing input files are reported on stderr with a failing exit code;
/// per-action failures are part of the normal output.
pub async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let stdin = io::stdin();
    let Some(mode) = cli.input_mode(!stdin.is_terminal()) else {
        Cli::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    let config = ResolverConfig::new(cli.api_url.as_str(), cli.token.clone());
    info!(
        "Using {} ({})",
        config.base_url,
        if config.token.is_some() {
            "authenticated"
        } else {
            "unauthenticated"
        }
    );
    let source = GitHubReleaseSource::new(&config).context("Failed to create HTTP client")?;
    let lookup = ActionLookup::new(ReleaseResolver::new(source, config.retry));

    let mut stdout = io::stdout().lock();
    match execute(&lookup, mode, cli.json, stdin.lock(), &mut stdout).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => match e.downcast_ref::<InputError>() {
            Some(input_error) => {
                eprintln!("Error: {}", input_error);
                Ok(ExitCode::FAILURE)
            }
            None => Err(e),
        },
    }
}

/// Process one input mode, writing results to `out`
///
/// `input` is only read for the stdin modes.
pub async fn execute<S, R, W>(
    lookup: &ActionLookup<S>,
    mode: InputMode,
    json: bool,
    input: R,
    out: &mut W,
) -> anyhow::Result<()>
where
    S: ReleaseSource,
    R: BufRead,
    W: Write,
{
    match mode {
        InputMode::Single(action) => {
            let result = lookup.lookup(&action).await;
            write_results(out, std::slice::from_ref(&result), json)
        }
        InputMode::File(path) => {
            let lines = read_action_lines(&path)?;
            process_lines(lookup, &lines, json, out).await
        }
        InputMode::Workflow { path, update } => {
            process_workflow(lookup, &path, update, json, out).await
        }
        InputMode::Stdin => {
            eprintln!("{}", STDIN_PROMPT);
            process_reader(lookup, input, json, out).await
        }
        InputMode::Piped => process_reader(lookup, input, json, out).await,
    }
}

/// Text mode prints each result as soon as it is resolved
async fn process_lines<S: ReleaseSource, W: Write>(
    lookup: &ActionLookup<S>,
    lines: &[String],
    json: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    if json {
        let results = lookup.lookup_all(lines).await;
        return write_results(out, &results, true);
    }

    for line in lines {
        let result = lookup.lookup(line).await;
        writeln!(out, "{}", result.resolved())?;
        out.flush()?;
    }
    Ok(())
}

async fn process_reader<S, R, W>(
    lookup: &ActionLookup<S>,
    input: R,
    json: bool,
    out: &mut W,
) -> anyhow::Result<()>
where
    S: ReleaseSource,
    R: BufRead,
    W: Write,
{
    if json {
        let lines = action_lines(input)?;
        return process_lines(lookup, &lines, true, out).await;
    }

    // Interactive input: answer each line before the next one is typed
    for line in input.lines() {
        let line = line.map_err(InputError::Stdin)?;
        if !is_action_line(&line) {
            continue;
        }
        let result = lookup.lookup(line.trim()).await;
        writeln!(out, "{}", result.resolved())?;
        out.flush()?;
    }
    Ok(())
}

async fn process_workflow<S: ReleaseSource, W: Write>(
    lookup: &ActionLookup<S>,
    path: &Path,
    update: bool,
    json: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let document = read_workflow(path)?;
    let entries = scan_workflow(&document);

    if entries.is_empty() {
        if json {
            let error = serde_json::json!({ "error": NO_ACTIONS_FOUND });
            writeln!(out, "{}", serde_json::to_string_pretty(&error)?)?;
        } else {
            writeln!(out, "{}", NO_ACTIONS_FOUND)?;
        }
        return Ok(());
    }

    let mut results = Vec::with_capacity(entries.len());
    for entry in &entries {
        let result = lookup.lookup(&entry.raw).await;
        if !json {
            writeln!(out, "{}", result.resolved())?;
            out.flush()?;
        }
        results.push(result);
    }
    if json {
        write_results(out, &results, true)?;
    }
    info!(
        "{} of {} actions in {} have a newer release",
        results.iter().filter(|result| result.is_outdated()).count(),
        results.len(),
        path.display()
    );

    if !update {
        return Ok(());
    }

    let outcome = apply_updates(&document, &latest_tags(&results));
    if outcome.updated_count() == 0 {
        writeln!(out, "{}", NO_UPDATES_NEEDED)?;
        return Ok(());
    }

    write_atomic(path, &outcome.document)
        .with_context(|| format!("Failed to write workflow file {}", path.display()))?;
    info!(
        "Rewrote {} with {} updated actions",
        path.display(),
        outcome.updated_count()
    );

    writeln!(
        out,
        "Updated {} action(s) in {}",
        outcome.updated_count(),
        path.display()
    )?;
    for edit in &outcome.plan.edits {
        writeln!(
            out,
            "  line {}: {} {} -> {}",
            edit.line + 1,
            edit.name,
            edit.old_version,
            edit.new_version
        )?;
    }
    Ok(())
}

fn write_results<W: Write>(
    out: &mut W,
    results: &[ResolutionResult],
    json: bool,
) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&to_json_map(results))?)?;
    } else {
        for result in results {
            writeln!(out, "{}", result.resolved())?;
        }
    }
    Ok(())
}
