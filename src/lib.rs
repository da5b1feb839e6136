//! Resolve GitHub Action references to their latest published release.
//!
//! # Modules
//!
//! - [`parser`]: `owner/repo[@version]` parsing and `uses:` line scanning
//! - [`release`]: Releases API access with retry/backoff and draft filtering
//! - [`lookup`]: Per-reference pipeline producing ordered results
//! - [`update`]: In-place version bumps for workflow documents
//! - [`input`]: Action lists, workflow files, and stdin
//! - [`cli`] / [`app`]: Command line surface and dispatch
//! - [`config`]: Constants and resolver settings
//! - [`logging`]: Tracing subscriber setup

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod lookup;
pub mod parser;
pub mod release;
pub mod update;
