// src/main.rs

use clap::Parser;
use classlog::cli::{Cli, Commands};
use classlog::commands;
use classlog::config::Config;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "classlog=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = Config::load().and_then(|mut config| {
        if let Some(path) = cli.workbook {
            config.workbook = path;
        }
        match cli.command {
            Some(Commands::Init) => commands::handle_init(&config),
            Some(Commands::Seed { list, names }) => commands::handle_seed(&config, list, &names),
            Some(Commands::Run) | None => commands::handle_run(&config),
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
