//! memory-trail - Memory Trail kiosk CLI
//!
//! Registers visitors, signs them in by Trail ID and reports their progress
//! across the kiosk activities. Output is JSON on stdout.
//!
//! # Examples
//!
//! ```bash
//! # Register and print the new Trail ID and QR payload
//! memory-trail register --name "Ada Lovelace" --email ada@example.com --pretty
//!
//! # Sign back in later
//! memory-trail login mt-7k3qxz
//!
//! # Record a kiosk and show progress
//! memory-trail complete kiosk3-np-trivia
//! memory-trail dashboard --pretty
//! ```

use mt_cli::{App, Cli, CliError, Result as CliResult, app, logger};

use mt_config::Config;

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<String> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(ref path) = log_file_path
        && let Some(log_dir) = path.parent()
    {
        std::fs::create_dir_all(log_dir)
            .map_err(|e| CliError::dir_creation(log_dir.to_path_buf(), e))?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting memory-trail v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let mut app = App::from_config(&config)?;
    let value = app.execute(cli.command)?;

    app::render(&value, cli.pretty)
}
