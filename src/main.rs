use std::process::ExitCode;

use action_latest::cli::Cli;
use clap::Parser;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let _log_guard = action_latest::logging::init(cli.log_file.as_deref())?;

    // Lookups run strictly one after another; a single thread is enough.
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(action_latest::app::run(cli))
}
