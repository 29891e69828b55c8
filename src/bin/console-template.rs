//! console-template CLI Binary
//!
//! Loads configuration, starts logging, then validates and runs the requested
//! command.

use anyhow::Context;
use chrono::Local;
use clap::{ArgMatches, CommandFactory, FromArgMatches};
use console_template::app::AppContext;
use console_template::cli::{exit_code, map_error, Cli, RunContext};
use console_template::config::{ConfigLoader, ConfigStore, APP_SETTINGS_LOGS_DIRECTORY};
use console_template::logging::{init_logging, log_file_path, LoggingConfig};
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let matches = Cli::command().get_matches();
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    let code = match run(&cli, &matches).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit_code::FAILURE
        }
    };
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

async fn run(cli: &Cli, matches: &ArgMatches) -> anyhow::Result<i32> {
    let settings =
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?;

    let logs_directory = cli
        .logs_directory
        .clone()
        .filter(|d| !d.trim().is_empty())
        .or_else(|| settings.get(APP_SETTINGS_LOGS_DIRECTORY));
    let log_path = log_file_path(logs_directory.as_deref(), Local::now());

    let mut logging = LoggingConfig::from_store(&settings, log_path.clone())
        .context("Invalid logging configuration")?;
    logging.apply_cli(cli.log_level.as_deref(), cli.verbose, cli.quiet);
    init_logging(&logging).context("Failed to initialize logging")?;

    let app = AppContext::new(settings, log_path).install()?;
    info!("LogPath - {}", app.log_path.display());

    match RunContext::new(app).execute(cli, matches).await {
        Ok(code) => Ok(code),
        Err(e) => {
            error!(error = %map_error(&e), "Command failed");
            eprintln!("{}", map_error(&e));
            Ok(exit_code::FAILURE)
        }
    }
}
