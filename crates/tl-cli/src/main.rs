use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tl_cli::commands::analyze;
use tl_cli::{Cli, Config};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support; stdout is reserved for the report
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let loaded = Config::load_from(cli.config.as_deref()).context("failed to load configuration");
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(?config, "loaded configuration");
    let threshold_km = cli.threshold.unwrap_or(config.threshold_km);

    let document = match analyze::load(&cli.file) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Error processing file: {e:#}");
            return ExitCode::from(analyze::INPUT_FAILURE_EXIT_CODE);
        }
    };

    if let Err(e) = analyze::run(&mut io::stdout().lock(), &document, threshold_km, cli.json) {
        eprintln!("Error: {e:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
