//! `seqnote` command-line entry point.
//!
//! # Responsibility
//! - Resolve scheme and logging settings, then dispatch one subcommand.
//! - Print results to stdout and errors to stderr with exit status 1.

mod cli;
mod commands;
mod error;

use clap::Parser;
use cli::{Cli, Commands};
use error::{exit_with_error, CliError, CliResult};
use log::info;
use seqnote_core::{
    default_log_level, init_logging, AllocationRequest, SequenceConfig, SequenceService,
};

fn init_file_logging(cli: &Cli) -> CliResult<()> {
    match (&cli.log_dir, &cli.log_level) {
        (Some(dir), level) => {
            let level = level.as_deref().unwrap_or(default_log_level());
            init_logging(level, &dir.to_string_lossy())?;
            Ok(())
        }
        (None, Some(_)) => Err(CliError::Usage("--log-level requires --log-dir".to_string())),
        (None, None) => Ok(()),
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        exit_with_error(e);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    init_file_logging(&cli)?;

    let scheme = match cli.scheme {
        Some(arg) => arg.into(),
        None => SequenceConfig::from_env()?.scheme,
    };
    let service = SequenceService::new(scheme);
    info!("event=cli_start module=cli status=ok scheme={scheme}");

    match cli.command {
        Commands::Split { address } => commands::split(&service, &address),
        Commands::Convert { address, to } => commands::convert_address(&address, to.into()),
        Commands::Child { target, vault } => {
            commands::allocate(&service, AllocationRequest::Child(target), &vault)
        }
        Commands::Sibling { target, vault } => {
            commands::allocate(&service, AllocationRequest::Sibling(target), &vault)
        }
        Commands::Root { vault } => commands::allocate(&service, AllocationRequest::Root, &vault),
        Commands::Tree { dir } => commands::tree(&service, &dir),
        Commands::Version => commands::version(),
    }
}
