use std::process::ExitCode;

use clap::Parser;
use pixelsmith_cli::cli::Cli;
use pixelsmith_cli::config::EditorConfig;
use pixelsmith_cli::{CliError, app, logging};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = EditorConfig::resolve(cli.config.as_deref(), cli.overrides())?;
    logging::init_tracing(&config.log_level)?;
    tracing::debug!(?config, "configuration resolved");
    app::run(cli.command, &config)
}
